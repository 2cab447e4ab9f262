//! Efficiency gain of the regenerative cycle over a simple reheat cycle.

use crate::common::{enthalpies, known};
use crate::params::{GC, GV, Params, REGEN_GAIN_PCT};
use crate::traits::BalanceModule;
use sc_steam::{Cycle, PointId};
use tracing::debug;

/// Relative gain `(η_regen − η_simple)/η_simple·100` [%].
///
/// The regenerative efficiency weights the reheat and LP work by `Gc/Gv`.
/// The simple-cycle baseline uses the same enthalpies without the flow
/// weighting and with heating from h2 instead of hn.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegenerativeGain;

impl RegenerativeGain {
    pub const ID: &'static str = "regenerative_gain";
}

impl BalanceModule for RegenerativeGain {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn solve(&self, points: &Cycle, params: &mut Params) {
        let (Some([gv, gc]), Some([h1, h2, h3, h4, h5, h6, hn])) = (
            known(params, [GV, GC]),
            enthalpies(
                points,
                [
                    PointId::One,
                    PointId::Two,
                    PointId::Three,
                    PointId::Four,
                    PointId::Five,
                    PointId::Six,
                    PointId::N,
                ],
            ),
        ) else {
            return;
        };
        if gv <= 0.0 {
            return;
        }

        let ratio = gc / gv;
        let pump_work = h2 - h1;

        let q_regen = (h3 - hn) + ratio * (h5 - h4);
        if q_regen <= 0.0 {
            return;
        }
        let w_regen = (h3 - h4) + ratio * (h5 - h6) - pump_work;
        let eta_regen = w_regen / q_regen;

        let q_simple = (h3 - h2) + (h5 - h4);
        if q_simple <= 0.0 {
            return;
        }
        let w_simple = (h3 - h4) + (h5 - h6) - pump_work;
        let eta_simple = w_simple / q_simple;
        if eta_simple <= 0.0 {
            debug!(module = Self::ID, eta_simple, "non-positive baseline, skipped");
            return;
        }

        params.set(REGEN_GAIN_PCT, (eta_regen - eta_simple) / eta_simple * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_steam::Point;

    fn cycle() -> Cycle {
        [
            (PointId::One, 100.0),
            (PointId::Two, 101.0),
            (PointId::Three, 800.0),
            (PointId::Four, 680.0),
            (PointId::Five, 780.0),
            (PointId::Six, 582.0),
            (PointId::N, 150.0),
        ]
        .into_iter()
        .map(|(id, h)| (id, Point::from_ph(None, h)))
        .collect()
    }

    #[test]
    fn gain_against_unweighted_baseline() {
        let mut params = Params::new().with(GV, 46.0).with(GC, 36.0);
        RegenerativeGain.solve(&cycle(), &mut params);

        let ratio = 36.0 / 46.0;
        let eta_regen = (120.0 + ratio * 198.0 - 1.0) / (650.0 + ratio * 100.0);
        let eta_simple = (120.0 + 198.0 - 1.0) / (699.0 + 100.0);
        let expected = (eta_regen - eta_simple) / eta_simple * 100.0;
        assert!((params.get(REGEN_GAIN_PCT).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_live_steam_is_a_no_op() {
        let mut params = Params::new().with(GV, 0.0).with(GC, 36.0);
        RegenerativeGain.solve(&cycle(), &mut params);
        assert!(!params.is_known(REGEN_GAIN_PCT));
    }
}
