// sc-core/src/units.rs

//! Unit handling.
//!
//! Cycle points carry enthalpy and entropy in the *display* unit (kcal) while
//! the property table works in the *table* unit (kJ). Pressure is in bar and
//! temperature in °C on both sides; backends that need SI go through the uom
//! constructors below.

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature};

pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Table unit per display unit (kJ per kcal, thermochemical calorie).
pub const KJ_PER_KCAL: f64 = 4.184;

/// kcal/h in one kW.
pub const KCAL_PER_HOUR_PER_KW: f64 = 860.421;

/// J per kJ, for backends working in SI base units.
pub const J_PER_KJ: f64 = 1.0e3;

/// Display unit to table unit (kcal → kJ).
#[inline]
pub fn kcal_to_kj(kcal: f64) -> f64 {
    kcal * KJ_PER_KCAL
}

/// Table unit to display unit (kJ → kcal).
#[inline]
pub fn kj_to_kcal(kj: f64) -> f64 {
    kj / KJ_PER_KCAL
}

/// [`kcal_to_kj`] over an optional value; absent stays absent.
#[inline]
pub fn kcal_to_kj_opt(v: Option<f64>) -> Option<f64> {
    v.map(kcal_to_kj)
}

/// [`kj_to_kcal`] over an optional value; absent stays absent.
#[inline]
pub fn kj_to_kcal_opt(v: Option<f64>) -> Option<f64> {
    v.map(kj_to_kcal)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_passes_through() {
        assert_eq!(kcal_to_kj_opt(None), None);
        assert_eq!(kj_to_kcal_opt(None), None);
        assert_eq!(kcal_to_kj_opt(Some(1.0)), Some(KJ_PER_KCAL));
    }

    #[test]
    fn known_factor() {
        let kj = kcal_to_kj(700.0);
        assert!((kj - 2928.8).abs() < 1e-9);
        let kcal = kj_to_kcal(2761.44);
        assert!((kcal - 660.0).abs() < 1e-9);
    }

    #[test]
    fn pressure_and_temperature_constructors() {
        assert!((to_pa(bar(1.0)) - 100_000.0).abs() < 1e-6);
        assert!((to_kelvin(celsius(100.0)) - 373.15).abs() < 1e-9);
        assert!((to_celsius(k(273.15))).abs() < 1e-9);
        assert!((to_bar(pa(250_000.0)) - 2.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn conversions_invert(v in -1.0e4_f64..1.0e4_f64) {
            let back = kj_to_kcal(kcal_to_kj(v));
            prop_assert!((back - v).abs() <= 1e-12 * v.abs().max(1.0));
        }
    }
}
