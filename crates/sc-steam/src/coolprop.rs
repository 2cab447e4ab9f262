//! CoolProp-based water/steam table.

use crate::error::{TableError, TableResult};
use crate::table::PropertyTable;
use crate::table::validation::{validate_input, validate_output, validate_pressure, validate_quality};
use rfluids::prelude::*;
use sc_core::units::{J_PER_KJ, bar, celsius, k, pa, to_bar, to_celsius, to_kelvin, to_pa};
use std::fmt::Display;

/// Critical temperature of water [°C].
pub const WATER_CRITICAL_TEMPERATURE_C: f64 = 373.946;

/// CoolProp backend for water properties.
///
/// Converts between table units (bar, °C, kJ) and CoolProp's SI base units on
/// every call. Thread-safe: rfluids Fluid instances are created per query and
/// never shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropTable;

impl CoolPropTable {
    /// Create a new CoolProp table.
    pub fn new() -> Self {
        Self
    }

    /// Define a water state from two inputs and read one output.
    fn query<E: Display>(
        &self,
        first: FluidInput,
        second: FluidInput,
        what: &'static str,
        get: impl FnOnce(&mut Fluid) -> Result<f64, E>,
    ) -> TableResult<f64> {
        let mut fluid = Fluid::from(Pure::Water)
            .in_state(first, second)
            .map_err(|e| TableError::Domain {
                what: format!("water state undefined: {}", e),
            })?;
        let value = get(&mut fluid).map_err(|e| TableError::Backend {
            message: format!("rfluids error getting {}: {}", what, e),
        })?;
        validate_output(value, what)
    }
}

fn pressure(p_bar: f64) -> TableResult<FluidInput> {
    let p_bar = validate_pressure(p_bar)?;
    Ok(FluidInput::pressure(to_pa(bar(p_bar))))
}

fn temperature(t_c: f64) -> TableResult<FluidInput> {
    let t_c = validate_input(t_c, "temperature")?;
    Ok(FluidInput::temperature(to_kelvin(celsius(t_c))))
}

fn enthalpy(h_kj: f64) -> TableResult<FluidInput> {
    let h_kj = validate_input(h_kj, "enthalpy")?;
    Ok(FluidInput::enthalpy(h_kj * J_PER_KJ))
}

fn entropy(s_kj: f64) -> TableResult<FluidInput> {
    let s_kj = validate_input(s_kj, "entropy")?;
    Ok(FluidInput::entropy(s_kj * J_PER_KJ))
}

fn quality(x: f64) -> TableResult<FluidInput> {
    Ok(FluidInput::quality(validate_quality(x)?))
}

impl PropertyTable for CoolPropTable {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn h_pt(&self, p: f64, t: f64) -> TableResult<f64> {
        let h = self.query(pressure(p)?, temperature(t)?, "enthalpy", |f| f.enthalpy())?;
        Ok(h / J_PER_KJ)
    }

    fn s_pt(&self, p: f64, t: f64) -> TableResult<f64> {
        let s = self.query(pressure(p)?, temperature(t)?, "entropy", |f| f.entropy())?;
        Ok(s / J_PER_KJ)
    }

    fn t_ph(&self, p: f64, h: f64) -> TableResult<f64> {
        let t_k = self.query(pressure(p)?, enthalpy(h)?, "temperature", |f| f.temperature())?;
        Ok(to_celsius(k(t_k)))
    }

    fn s_ph(&self, p: f64, h: f64) -> TableResult<f64> {
        let s = self.query(pressure(p)?, enthalpy(h)?, "entropy", |f| f.entropy())?;
        Ok(s / J_PER_KJ)
    }

    fn t_ps(&self, p: f64, s: f64) -> TableResult<f64> {
        let t_k = self.query(pressure(p)?, entropy(s)?, "temperature", |f| f.temperature())?;
        Ok(to_celsius(k(t_k)))
    }

    fn h_ps(&self, p: f64, s: f64) -> TableResult<f64> {
        let h = self.query(pressure(p)?, entropy(s)?, "enthalpy", |f| f.enthalpy())?;
        Ok(h / J_PER_KJ)
    }

    fn p_hs(&self, h: f64, s: f64) -> TableResult<f64> {
        let p_pa = self.query(enthalpy(h)?, entropy(s)?, "pressure", |f| f.pressure())?;
        Ok(to_bar(pa(p_pa)))
    }

    fn t_hs(&self, h: f64, s: f64) -> TableResult<f64> {
        let t_k = self.query(enthalpy(h)?, entropy(s)?, "temperature", |f| f.temperature())?;
        Ok(to_celsius(k(t_k)))
    }

    fn h_px(&self, p: f64, x: f64) -> TableResult<f64> {
        let h = self.query(pressure(p)?, quality(x)?, "enthalpy", |f| f.enthalpy())?;
        Ok(h / J_PER_KJ)
    }

    fn tsat_p(&self, p: f64) -> TableResult<f64> {
        let t_k = self.query(pressure(p)?, quality(0.0)?, "saturation temperature", |f| {
            f.temperature()
        })?;
        Ok(to_celsius(k(t_k)))
    }

    fn psat_t(&self, t: f64) -> TableResult<Option<f64>> {
        if validate_input(t, "temperature")? >= WATER_CRITICAL_TEMPERATURE_C {
            return Ok(None);
        }
        let p_pa = self.query(temperature(t)?, quality(0.0)?, "saturation pressure", |f| {
            f.pressure()
        })?;
        Ok(Some(to_bar(pa(p_pa))))
    }

    fn s_liq_p(&self, p: f64) -> TableResult<f64> {
        let s = self.query(pressure(p)?, quality(0.0)?, "liquid entropy", |f| f.entropy())?;
        Ok(s / J_PER_KJ)
    }

    fn s_vap_p(&self, p: f64) -> TableResult<f64> {
        let s = self.query(pressure(p)?, quality(1.0)?, "vapor entropy", |f| f.entropy())?;
        Ok(s / J_PER_KJ)
    }

    fn x_ph(&self, p: f64, h: f64) -> TableResult<f64> {
        self.query(pressure(p)?, enthalpy(h)?, "quality", |f| f.quality())
    }
}
