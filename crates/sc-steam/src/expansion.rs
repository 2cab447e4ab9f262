//! Turbine expansions and isentropic efficiencies.
//!
//! Each turbine leg relates an inlet enthalpy, an ideal (isentropic) outlet
//! enthalpy and a real outlet enthalpy through the stage efficiency:
//!
//! ```text
//! h_real = h_in − (h_in − h_ideal) · η/100
//! η      = (h_in − h_real) / (h_in − h_ideal) · 100
//! ```
//!
//! The forward relation is evaluated in table units (kJ) and converted back.

use crate::point::{Cycle, Point, PointId};
use crate::resolver::StateResolver;
use crate::table::PropertyTable;
use sc_core::between_inclusive;
use sc_core::units::{kcal_to_kj, kj_to_kcal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stage efficiencies [%]; either may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Efficiencies {
    #[serde(default)]
    pub eta_hp: Option<f64>,
    #[serde(default)]
    pub eta_lp: Option<f64>,
}

/// Result of expanding a cycle: updated points and both efficiencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleExpansion {
    pub points: Cycle,
    pub eta_hp: Option<f64>,
    pub eta_lp: Option<f64>,
}

/// Which stage efficiency a leg uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    HighPressure,
    LowPressure,
}

/// One turbine leg: inlet, ideal outlet and real outlet points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurbineLeg {
    pub name: &'static str,
    pub inlet: PointId,
    pub ideal: PointId,
    pub real: PointId,
    pub stage: Stage,
}

impl TurbineLeg {
    pub const HIGH_PRESSURE: TurbineLeg = TurbineLeg {
        name: "hp",
        inlet: PointId::Three,
        ideal: PointId::FourPrime,
        real: PointId::Four,
        stage: Stage::HighPressure,
    };

    /// Extraction shares the HP stage efficiency.
    pub const EXTRACTION: TurbineLeg = TurbineLeg {
        name: "extraction",
        inlet: PointId::Three,
        ideal: PointId::XPrime,
        real: PointId::X,
        stage: Stage::HighPressure,
    };

    pub const LOW_PRESSURE: TurbineLeg = TurbineLeg {
        name: "lp",
        inlet: PointId::Five,
        ideal: PointId::SixPrime,
        real: PointId::Six,
        stage: Stage::LowPressure,
    };

    /// Legs in evaluation order.
    pub const ALL: [TurbineLeg; 3] = [Self::HIGH_PRESSURE, Self::EXTRACTION, Self::LOW_PRESSURE];
}

/// What solving a leg produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegOutcome {
    /// Real outlet enthalpy [kcal/kg] computed from the efficiency.
    RealEnthalpy(f64),
    /// Efficiency [%] computed from the real outlet enthalpy.
    Efficiency(f64),
    Unchanged,
}

/// Real outlet enthalpy [kcal/kg] from inlet and ideal enthalpies [kcal/kg]
/// and efficiency [%].
pub fn real_enthalpy(h_in: f64, h_ideal: f64, eta: f64) -> f64 {
    let (h_in_kj, h_ideal_kj) = (kcal_to_kj(h_in), kcal_to_kj(h_ideal));
    kj_to_kcal(h_in_kj - (h_in_kj - h_ideal_kj) * (eta / 100.0))
}

/// Isentropic efficiency [%], defined only for a positive ideal drop.
pub fn isentropic_efficiency(h_in: f64, h_ideal: f64, h_real: f64) -> Option<f64> {
    let ideal_drop = h_in - h_ideal;
    (ideal_drop > 0.0).then(|| (h_in - h_real) / ideal_drop * 100.0)
}

/// Solve one leg in whichever direction the known values allow.
///
/// Requires inlet and ideal enthalpies. Efficiency known with real outlet
/// unknown runs forward; real outlet known with efficiency unknown runs the
/// inverse. Anything else leaves the leg untouched.
pub fn solve_leg(
    h_in: Option<f64>,
    h_ideal: Option<f64>,
    h_real: Option<f64>,
    eta: Option<f64>,
) -> LegOutcome {
    let (Some(h_in), Some(h_ideal)) = (h_in, h_ideal) else {
        return LegOutcome::Unchanged;
    };
    match (eta, h_real) {
        (Some(eta), None) => LegOutcome::RealEnthalpy(real_enthalpy(h_in, h_ideal, eta)),
        (None, Some(h_real)) => isentropic_efficiency(h_in, h_ideal, h_real)
            .map_or(LegOutcome::Unchanged, LegOutcome::Efficiency),
        _ => LegOutcome::Unchanged,
    }
}

/// Whether the extraction pressure lies between the LP inlet and HP inlet
/// pressures, inclusive. False when any of the three is unknown.
pub fn extraction_admissible(cycle: &Cycle) -> bool {
    match (
        cycle.p(PointId::X),
        cycle.p(PointId::Three),
        cycle.p(PointId::Five),
    ) {
        (Some(px), Some(p3), Some(p5)) => between_inclusive(px, p5, p3),
        _ => false,
    }
}

/// Expands turbine legs of a cycle and re-resolves the points it changes.
pub struct EfficiencyExpander<'a, T> {
    resolver: &'a StateResolver<T>,
}

impl<'a, T: PropertyTable> EfficiencyExpander<'a, T> {
    pub fn new(resolver: &'a StateResolver<T>) -> Self {
        Self { resolver }
    }

    /// Expand all legs of `cycle`.
    ///
    /// Legs run in order HP, extraction, LP; an efficiency derived by the HP
    /// leg is visible to the extraction leg. Real outlets that received a new
    /// enthalpy are re-resolved from their pressure and that enthalpy, which
    /// replaces the rest of the point. Resolution failures stay on the point.
    pub fn expand(&self, cycle: &Cycle, efficiencies: Efficiencies) -> CycleExpansion {
        let mut points = cycle.clone();
        let mut eta_hp = efficiencies.eta_hp;
        let mut eta_lp = efficiencies.eta_lp;
        let mut updated = Vec::new();

        for leg in TurbineLeg::ALL {
            if leg == TurbineLeg::EXTRACTION && !extraction_admissible(&points) {
                debug!(leg = leg.name, "skipping leg: extraction pressure out of order");
                continue;
            }

            let eta = match leg.stage {
                Stage::HighPressure => &mut eta_hp,
                Stage::LowPressure => &mut eta_lp,
            };

            let outcome = solve_leg(
                points.h(leg.inlet),
                points.h(leg.ideal),
                points.h(leg.real),
                *eta,
            );
            debug!(leg = leg.name, ?outcome, "solved turbine leg");

            match outcome {
                LegOutcome::RealEnthalpy(h) => {
                    points.set_h(leg.real, h);
                    updated.push(leg.real);
                }
                LegOutcome::Efficiency(value) => *eta = Some(value),
                LegOutcome::Unchanged => {}
            }
        }

        for id in updated {
            let Some(h) = points.h(id) else { continue };
            let resolved = self
                .resolver
                .resolve(&Point::from_ph(points.p(id), h));
            points.insert(id, resolved);
        }

        CycleExpansion {
            points,
            eta_hp,
            eta_lp,
        }
    }
}

impl<T: PropertyTable> StateResolver<T> {
    /// Expander sharing this resolver.
    pub fn expander(&self) -> EfficiencyExpander<'_, T> {
        EfficiencyExpander::new(self)
    }
}
