//! Mass balance around the closed feedwater preheater.

use crate::common::enthalpies;
use crate::params::{GC, GV, GX, Params};
use crate::traits::BalanceModule;
use sc_steam::{Cycle, PointId};
use tracing::debug;

/// Splits the live steam flow between extraction and condenser.
///
/// The extraction steam (x → n′) heats the condensate (2 → n):
/// `Gx·(hx − hn′) = Gc·(hn − h2)` with `Gv = Gx + Gc`. Given any one of the
/// three flows the other two follow. Candidate branches, in priority order:
///
/// 1. `Gv` absent, `Gx` known: solve `Gc`, then `Gv`.
/// 2. `Gv` absent, `Gc` known: solve `Gx`, then `Gv`.
/// 3. `Gv` known and `Gx` or `Gc` absent: split `Gv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MassBalancePreheater;

impl MassBalancePreheater {
    pub const ID: &'static str = "mass_balance_preheater";
}

impl BalanceModule for MassBalancePreheater {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn solve(&self, points: &Cycle, params: &mut Params) {
        let Some([h2, hn, hx, hn_prime]) = enthalpies(
            points,
            [PointId::Two, PointId::N, PointId::X, PointId::NPrime],
        ) else {
            debug!(module = Self::ID, "missing enthalpies, skipped");
            return;
        };

        let dh_condensate = hn - h2;
        let dh_extraction = hx - hn_prime;
        if dh_condensate <= 0.0 || dh_extraction <= 0.0 {
            debug!(
                module = Self::ID,
                dh_condensate, dh_extraction, "non-positive enthalpy rise, skipped"
            );
            return;
        }

        let (gv, gx, gc) = match (params.get(GV), params.get(GX), params.get(GC)) {
            (None, Some(gx), _) => {
                let gc = gx * dh_extraction / dh_condensate;
                (gx + gc, gx, gc)
            }
            (None, None, Some(gc)) => {
                let gx = gc * dh_condensate / dh_extraction;
                (gx + gc, gx, gc)
            }
            (Some(gv), gx, gc) if gx.is_none() || gc.is_none() => {
                let gx = gv * dh_condensate / (dh_extraction + dh_condensate);
                (gv, gx, gv - gx)
            }
            _ => return,
        };

        params.set(GV, gv);
        params.set(GX, gx);
        params.set(GC, gc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_steam::Point;

    fn cycle() -> Cycle {
        [
            (PointId::Two, 100.0),
            (PointId::N, 150.0),
            (PointId::X, 300.0),
            (PointId::NPrime, 120.0),
        ]
        .into_iter()
        .map(|(id, h)| (id, Point::from_ph(None, h)))
        .collect()
    }

    #[test]
    fn solves_from_extraction_flow() {
        let mut params = Params::new().with(GX, 10.0);
        MassBalancePreheater.solve(&cycle(), &mut params);
        assert!((params.get(GC).unwrap() - 36.0).abs() < 1e-9);
        assert!((params.get(GV).unwrap() - 46.0).abs() < 1e-9);
    }

    #[test]
    fn solves_from_condenser_flow() {
        let mut params = Params::new().with(GC, 36.0);
        MassBalancePreheater.solve(&cycle(), &mut params);
        assert!((params.get(GX).unwrap() - 10.0).abs() < 1e-9);
        assert!((params.get(GV).unwrap() - 46.0).abs() < 1e-9);
    }

    #[test]
    fn splits_live_steam_flow() {
        let mut params = Params::new().with(GV, 46.0);
        MassBalancePreheater.solve(&cycle(), &mut params);
        assert!((params.get(GX).unwrap() - 10.0).abs() < 1e-9);
        assert!((params.get(GC).unwrap() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn extraction_flow_wins_over_condenser_flow() {
        let mut params = Params::new().with(GX, 10.0).with(GC, 1.0);
        MassBalancePreheater.solve(&cycle(), &mut params);
        assert!((params.get(GC).unwrap() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn no_flow_known_is_a_no_op() {
        let mut params = Params::new();
        MassBalancePreheater.solve(&cycle(), &mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn non_positive_rise_is_a_no_op() {
        let mut points = cycle();
        points.set_h(PointId::N, 90.0);
        let mut params = Params::new().with(GX, 10.0);
        MassBalancePreheater.solve(&points, &mut params);
        assert_eq!(params, Params::new().with(GX, 10.0));
    }

    #[test]
    fn missing_enthalpy_is_a_no_op() {
        let mut points = cycle();
        points.insert(PointId::X, Point::default());
        let mut params = Params::new().with(GX, 10.0);
        MassBalancePreheater.solve(&points, &mut params);
        assert!(!params.is_known(GV));
    }
}
