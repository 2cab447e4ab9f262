//! Property table trait and validation helpers.

use crate::error::TableResult;

/// Capability contract of a water/steam property table.
///
/// All values are in *table* units: pressure in bar, temperature in °C,
/// specific enthalpy in kJ/kg and specific entropy in kJ/(kg·K). Quality is a
/// fraction in [0, 1].
///
/// Implementations must be thread-safe (Send + Sync) and stateless across calls
/// so a single table can serve concurrent resolutions. Inputs outside the
/// substance's valid domain fail with [`TableError::Domain`](crate::TableError::Domain).
pub trait PropertyTable: Send + Sync {
    /// Table name (for debugging/logging).
    fn name(&self) -> &str;

    /// Specific enthalpy at (p, t).
    fn h_pt(&self, p: f64, t: f64) -> TableResult<f64>;

    /// Specific entropy at (p, t).
    fn s_pt(&self, p: f64, t: f64) -> TableResult<f64>;

    /// Temperature at (p, h).
    fn t_ph(&self, p: f64, h: f64) -> TableResult<f64>;

    /// Specific entropy at (p, h).
    fn s_ph(&self, p: f64, h: f64) -> TableResult<f64>;

    /// Temperature at (p, s).
    fn t_ps(&self, p: f64, s: f64) -> TableResult<f64>;

    /// Specific enthalpy at (p, s).
    fn h_ps(&self, p: f64, s: f64) -> TableResult<f64>;

    /// Pressure at (h, s).
    fn p_hs(&self, h: f64, s: f64) -> TableResult<f64>;

    /// Temperature at (h, s).
    fn t_hs(&self, h: f64, s: f64) -> TableResult<f64>;

    /// Two-phase specific enthalpy at pressure `p` and quality `x`.
    fn h_px(&self, p: f64, x: f64) -> TableResult<f64>;

    /// Saturation temperature at `p`.
    fn tsat_p(&self, p: f64) -> TableResult<f64>;

    /// Saturation pressure at `t`, or `None` where no saturation pressure exists
    /// (above the critical temperature).
    fn psat_t(&self, t: f64) -> TableResult<Option<f64>>;

    /// Saturated liquid entropy at `p`.
    fn s_liq_p(&self, p: f64) -> TableResult<f64>;

    /// Saturated vapor entropy at `p`.
    fn s_vap_p(&self, p: f64) -> TableResult<f64>;

    /// Vapor quality at (p, h).
    ///
    /// Outside the saturation dome the result may fall outside [0, 1]; callers
    /// decide what to do with it.
    fn x_ph(&self, p: f64, h: f64) -> TableResult<f64>;
}

/// Validation helpers shared by table implementations.
pub(crate) mod validation {
    use crate::error::{TableError, TableResult};
    use sc_core::{ensure_finite, ensure_positive, is_quality};

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: f64) -> TableResult<f64> {
        let p = validate_input(p, "pressure")?;
        Ok(ensure_positive(p, "pressure")?)
    }

    /// Ensure quality lies in [0, 1].
    pub fn validate_quality(x: f64) -> TableResult<f64> {
        let x = validate_input(x, "quality")?;
        if !is_quality(x) {
            return Err(TableError::InvalidArg {
                what: "quality must lie in [0, 1]",
            });
        }
        Ok(x)
    }

    /// Ensure an input value is finite (enthalpy, entropy and temperature may be negative).
    pub fn validate_input(v: f64, what: &'static str) -> TableResult<f64> {
        ensure_finite(v, what).map_err(|_| TableError::InvalidArg {
            what: "inputs must be finite",
        })
    }

    /// Ensure a backend output is finite.
    pub fn validate_output(v: f64, what: &'static str) -> TableResult<f64> {
        Ok(ensure_finite(v, what)?)
    }
}
