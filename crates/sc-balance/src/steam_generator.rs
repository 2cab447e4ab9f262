//! Steam generator (boiler plus reheater) performance.

use crate::common::{enthalpies, known};
use crate::params::{GC, GCO, GV, PCI, Params, RGV};
use crate::traits::BalanceModule;
use sc_steam::{Cycle, PointId};
use tracing::debug;

/// Boiler efficiency or fuel consumption from the heat added to the steam.
///
/// Heat added: `Gv·(h3 − hn) + Gc·(h5 − h4)`, the feedwater heating plus the
/// reheat of the LP flow. With a positive heat and a positive `Pci`:
/// `rgv = heat/(Gco·Pci)·100` when `rgv` is absent and `Gco > 0`, otherwise
/// `Gco = heat/(Pci·rgv/100)` when `Gco` is absent and `rgv > 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteamGeneratorPerformance;

impl SteamGeneratorPerformance {
    pub const ID: &'static str = "steam_generator_performance";
}

impl BalanceModule for SteamGeneratorPerformance {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn solve(&self, points: &Cycle, params: &mut Params) {
        let (Some([gv, gc]), Some([h3, h4, h5, hn])) = (
            known(params, [GV, GC]),
            enthalpies(
                points,
                [PointId::Three, PointId::Four, PointId::Five, PointId::N],
            ),
        ) else {
            debug!(module = Self::ID, "missing flows or enthalpies, skipped");
            return;
        };

        let heat_added = gv * (h3 - hn) + gc * (h5 - h4);
        if heat_added <= 0.0 {
            debug!(module = Self::ID, heat_added, "non-positive heat added, skipped");
            return;
        }

        let Some(pci) = params.get(PCI).filter(|&pci| pci > 0.0) else {
            return;
        };
        match (params.get(RGV), params.get(GCO)) {
            (None, Some(gco)) if gco > 0.0 => params.set(RGV, heat_added / (gco * pci) * 100.0),
            (Some(rgv), None) if rgv > 0.0 => params.set(GCO, heat_added / (pci * rgv / 100.0)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_steam::Point;

    fn cycle() -> Cycle {
        [
            (PointId::Three, 800.0),
            (PointId::Four, 680.0),
            (PointId::Five, 780.0),
            (PointId::N, 150.0),
        ]
        .into_iter()
        .map(|(id, h)| (id, Point::from_ph(None, h)))
        .collect()
    }

    fn flows() -> Params {
        // heat added = 46·650 + 36·100 = 33500 kcal/h
        Params::new().with(GV, 46.0).with(GC, 36.0).with(PCI, 10000.0)
    }

    #[test]
    fn efficiency_from_fuel_flow() {
        let mut params = flows().with(GCO, 4.0);
        SteamGeneratorPerformance.solve(&cycle(), &mut params);
        assert!((params.get(RGV).unwrap() - 83.75).abs() < 1e-9);
    }

    #[test]
    fn fuel_flow_from_efficiency() {
        let mut params = flows().with(RGV, 83.75);
        SteamGeneratorPerformance.solve(&cycle(), &mut params);
        assert!((params.get(GCO).unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn heating_value_required() {
        let mut params = flows().with(GCO, 4.0).with(PCI, 0.0);
        SteamGeneratorPerformance.solve(&cycle(), &mut params);
        assert!(!params.is_known(RGV));
    }

    #[test]
    fn missing_flow_is_a_no_op() {
        let mut params = Params::new().with(GV, 46.0).with(GCO, 4.0).with(PCI, 1.0);
        SteamGeneratorPerformance.solve(&cycle(), &mut params);
        assert!(!params.is_known(RGV));
    }
}
