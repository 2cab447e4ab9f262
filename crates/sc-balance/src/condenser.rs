//! Energy balance across the condenser.

use crate::common::{enthalpies, known};
use crate::params::{CP, GC, Params, QC, TE, TS, W};
use crate::traits::BalanceModule;
use sc_steam::{Cycle, PointId};
use tracing::debug;

/// Heat rejected by the LP exhaust (6 → 1) into the cooling water.
///
/// Steam side: `Qc = Gc·(h6 − h1)`. Water side: `Qc = W·Cp·(ts − te)`.
///
/// Solved in two stages. First `Qc`, if absent, from the steam side or else
/// from the water side. Then, when `Qc` and a positive `Cp` are known, the
/// first absent of `W`, `ts`, `te` that the water side can determine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CondenserBalance;

impl CondenserBalance {
    pub const ID: &'static str = "condenser_balance";

    fn heat_rejected(points: &Cycle, params: &Params) -> Option<f64> {
        if let (Some(gc), Some([h6, h1])) =
            (params.get(GC), enthalpies(points, [PointId::Six, PointId::One]))
            && h6 > h1
        {
            return Some(gc * (h6 - h1));
        }
        if let Some([w, ts, te, cp]) = known(params, [W, TS, TE, CP])
            && ts > te
        {
            return Some(w * cp * (ts - te));
        }
        None
    }
}

impl BalanceModule for CondenserBalance {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn solve(&self, points: &Cycle, params: &mut Params) {
        if !params.is_known(QC) {
            match Self::heat_rejected(points, params) {
                Some(qc) => params.set(QC, qc),
                None => debug!(module = Self::ID, "heat rejected not determined"),
            }
        }

        let (Some(qc), Some(cp)) = (params.get(QC), params.get(CP)) else {
            return;
        };
        if cp <= 0.0 {
            return;
        }

        let (w, ts, te) = (params.get(W), params.get(TS), params.get(TE));
        match (w, ts, te) {
            (None, Some(ts), Some(te)) if ts > te => params.set(W, qc / (cp * (ts - te))),
            (Some(w), None, Some(te)) if w > 0.0 => params.set(TS, te + qc / (w * cp)),
            (Some(w), Some(ts), None) if w > 0.0 => params.set(TE, ts - qc / (w * cp)),
            _ => {}
        }
    }
}
