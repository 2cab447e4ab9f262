//! Net electrical power of the cycle.

use crate::common::{enthalpies, known};
use crate::params::{GC, GV, NET_POWER_KW, Params};
use crate::traits::BalanceModule;
use sc_core::units::KCAL_PER_HOUR_PER_KW;
use sc_steam::{Cycle, PointId};

/// Turbine work `Gv·(h3 − h4) + Gc·(h5 − h6)` [kcal/h], reported in kW when
/// positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetPower;

impl NetPower {
    pub const ID: &'static str = "net_power";
}

impl BalanceModule for NetPower {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn solve(&self, points: &Cycle, params: &mut Params) {
        let (Some([gv, gc]), Some([h3, h4, h5, h6])) = (
            known(params, [GV, GC]),
            enthalpies(
                points,
                [PointId::Three, PointId::Four, PointId::Five, PointId::Six],
            ),
        ) else {
            return;
        };

        let work = gv * (h3 - h4) + gc * (h5 - h6);
        if work > 0.0 {
            params.set(NET_POWER_KW, work / KCAL_PER_HOUR_PER_KW);
        }
    }
}
