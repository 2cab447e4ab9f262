//! Point state resolution.
//!
//! Picks the first admissible pair of known properties, queries the table for
//! the complementary ones and, when the state sits on the saturation line,
//! infers vapor quality.

use crate::error::{ResolveError, TableResult};
use crate::point::Point;
use crate::table::PropertyTable;
use sc_core::is_quality;
use sc_core::units::{kcal_to_kj, kj_to_kcal_opt};
use tracing::{debug, warn};

/// Band around the saturation temperature [°C] inside which a (p, h) state
/// counts as two-phase.
pub const SATURATION_TOLERANCE_C: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverSettings {
    /// |t(p, h) − tsat(p)| below this [°C] triggers quality inference.
    pub saturation_tolerance_c: f64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            saturation_tolerance_c: SATURATION_TOLERANCE_C,
        }
    }
}

/// Known-property pair that drives a table lookup.
///
/// Values are in display units (bar, °C, kcal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnownPair {
    PT { p: f64, t: f64 },
    PH { p: f64, h: f64 },
    PS { p: f64, s: f64 },
    HS { h: f64, s: f64 },
    PX { p: f64, x: f64 },
    TX { t: f64, x: f64 },
}

impl KnownPair {
    /// Select the pair for a point. Rules are tried top to bottom and only
    /// the first match is used.
    pub fn select(point: &Point) -> Option<Self> {
        match (point.p, point.t, point.h, point.s, point.x) {
            (Some(p), Some(t), _, _, _) => Some(Self::PT { p, t }),
            (Some(p), _, Some(h), _, _) => Some(Self::PH { p, h }),
            (Some(p), _, _, Some(s), _) => Some(Self::PS { p, s }),
            (_, _, Some(h), Some(s), _) => Some(Self::HS { h, s }),
            (Some(p), _, _, _, Some(x)) => Some(Self::PX { p, x }),
            (_, Some(t), _, _, Some(x)) => Some(Self::TX { t, x }),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PT { .. } => "p-t",
            Self::PH { .. } => "p-h",
            Self::PS { .. } => "p-s",
            Self::HS { .. } => "h-s",
            Self::PX { .. } => "p-x",
            Self::TX { .. } => "t-x",
        }
    }
}

/// Completes cycle points against a property table.
///
/// Holds only the table handle and immutable settings, so one resolver can be
/// shared by concurrent callers.
#[derive(Debug, Clone)]
pub struct StateResolver<T> {
    table: T,
    settings: ResolverSettings,
}

impl<T: PropertyTable> StateResolver<T> {
    pub fn new(table: T) -> Self {
        Self::with_settings(table, ResolverSettings::default())
    }

    pub fn with_settings(table: T, settings: ResolverSettings) -> Self {
        Self { table, settings }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn settings(&self) -> ResolverSettings {
        self.settings
    }

    /// Resolve a point.
    ///
    /// Never fails: when the table rejects the inputs the returned point
    /// carries the original inputs plus an `error` message.
    pub fn resolve(&self, point: &Point) -> Point {
        let inputs = point.inputs();
        match self.try_resolve(&inputs) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(table = self.table.name(), error = %err, "point resolution failed");
                Point {
                    error: Some(err.to_string()),
                    ..inputs
                }
            }
        }
    }

    fn try_resolve(&self, inputs: &Point) -> Result<Point, ResolveError> {
        let mut out = inputs.clone();
        let table = &self.table;
        let pair = KnownPair::select(inputs);
        debug!(pair = pair.map(KnownPair::label), "resolving point");

        // Table-unit (kJ) enthalpy and entropy produced by the lookup.
        let (mut h_out, mut s_out) = (None, None);

        match pair {
            Some(KnownPair::PT { p, t }) => {
                h_out = Some(table.h_pt(p, t)?);
                s_out = Some(table.s_pt(p, t)?);
            }
            Some(KnownPair::PH { p, h }) => {
                let h_kj = kcal_to_kj(h);
                out.t = Some(table.t_ph(p, h_kj)?);
                s_out = Some(table.s_ph(p, h_kj)?);
            }
            Some(KnownPair::PS { p, s }) => {
                let s_kj = kcal_to_kj(s);
                out.t = Some(table.t_ps(p, s_kj)?);
                h_out = Some(table.h_ps(p, s_kj)?);
            }
            Some(KnownPair::HS { h, s }) => {
                let (h_kj, s_kj) = (kcal_to_kj(h), kcal_to_kj(s));
                out.p = Some(table.p_hs(h_kj, s_kj)?);
                out.t = Some(table.t_hs(h_kj, s_kj)?);
            }
            Some(KnownPair::PX { p, x }) => {
                out.t = Some(table.tsat_p(p)?);
                h_out = Some(table.h_px(p, x)?);
                s_out = Some(self.mixture_entropy(p, x)?);
            }
            Some(KnownPair::TX { t, x }) => match table.psat_t(t)? {
                Some(p) => {
                    out.p = Some(p);
                    h_out = Some(table.h_px(p, x)?);
                    s_out = Some(self.mixture_entropy(p, x)?);
                }
                None => debug!(t_c = t, "no saturation pressure at temperature"),
            },
            None => debug!("no resolvable property pair"),
        }

        out.h = kj_to_kcal_opt(h_out).or(out.h);
        out.s = kj_to_kcal_opt(s_out).or(out.s);

        if out.x.is_none()
            && let (Some(p), Some(h)) = (out.p, out.h)
        {
            out.x = self.infer_quality(p, h);
        }

        Ok(out)
    }

    /// sL + x·(sV − sL) at pressure `p`, in table units.
    fn mixture_entropy(&self, p: f64, x: f64) -> TableResult<f64> {
        let s_liq = self.table.s_liq_p(p)?;
        let s_vap = self.table.s_vap_p(p)?;
        Ok(s_liq + x * (s_vap - s_liq))
    }

    /// Quality of a (p, h) state lying on the saturation line.
    ///
    /// Returns `None` away from saturation, when the table value falls outside
    /// [0, 1], or when any table query fails.
    fn infer_quality(&self, p: f64, h: f64) -> Option<f64> {
        let h_kj = kcal_to_kj(h);
        let check = || -> TableResult<Option<f64>> {
            let t_sat = self.table.tsat_p(p)?;
            let t = self.table.t_ph(p, h_kj)?;
            if (t - t_sat).abs() >= self.settings.saturation_tolerance_c {
                return Ok(None);
            }
            let x = self.table.x_ph(p, h_kj)?;
            Ok(is_quality(x).then_some(x))
        };

        match check() {
            Ok(x) => x,
            Err(err) => {
                debug!(p_bar = p, h_kcal = h, error = %err, "quality inference skipped");
                None
            }
        }
    }
}
