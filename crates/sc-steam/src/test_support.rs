//! Deterministic analytic table for unit tests.
//!
//! A caricature of water: constant liquid and vapor heat capacities, a
//! constant latent heat and `tsat = 100·p^0.25`. Every relation inverts in
//! closed form, so resolver behavior can be checked exactly without CoolProp.
//! The (h, s) pair is not supported.

use crate::error::{TableError, TableResult};
use crate::table::PropertyTable;
use crate::table::validation::{validate_input, validate_pressure, validate_quality};

const CP_LIQUID: f64 = 4.2;
const CP_VAPOR: f64 = 2.0;
const LATENT: f64 = 2000.0;
const P_CRIT: f64 = 220.64;
const T_REF_K: f64 = 273.15;

pub(crate) struct AnalyticTable;

impl AnalyticTable {
    fn tsat(p: f64) -> TableResult<f64> {
        let p = validate_pressure(p)?;
        if p > P_CRIT {
            return Err(TableError::Domain {
                what: format!("pressure {p} bar above critical"),
            });
        }
        Ok(100.0 * p.powf(0.25))
    }

    fn h_liq(p: f64) -> TableResult<f64> {
        Ok(CP_LIQUID * Self::tsat(p)?)
    }

    fn h_vap(p: f64) -> TableResult<f64> {
        Ok(Self::h_liq(p)? + LATENT)
    }

    fn tsat_k(p: f64) -> TableResult<f64> {
        Ok(Self::tsat(p)? + T_REF_K)
    }
}

impl PropertyTable for AnalyticTable {
    fn name(&self) -> &str {
        "analytic"
    }

    fn h_pt(&self, p: f64, t: f64) -> TableResult<f64> {
        let t = validate_input(t, "temperature")?;
        let tsat = Self::tsat(p)?;
        if t <= tsat {
            Ok(CP_LIQUID * t)
        } else {
            Ok(Self::h_vap(p)? + CP_VAPOR * (t - tsat))
        }
    }

    fn s_pt(&self, p: f64, t: f64) -> TableResult<f64> {
        let t = validate_input(t, "temperature")?;
        let tsat = Self::tsat(p)?;
        if t + T_REF_K <= 0.0 {
            return Err(TableError::Domain {
                what: "temperature below absolute zero".into(),
            });
        }
        if t <= tsat {
            Ok(CP_LIQUID * ((t + T_REF_K) / T_REF_K).ln())
        } else {
            Ok(self.s_vap_p(p)? + CP_VAPOR * ((t + T_REF_K) / Self::tsat_k(p)?).ln())
        }
    }

    fn t_ph(&self, p: f64, h: f64) -> TableResult<f64> {
        let h = validate_input(h, "enthalpy")?;
        let (hl, hv) = (Self::h_liq(p)?, Self::h_vap(p)?);
        if h <= hl {
            Ok(h / CP_LIQUID)
        } else if h >= hv {
            Ok(Self::tsat(p)? + (h - hv) / CP_VAPOR)
        } else {
            Self::tsat(p)
        }
    }

    fn s_ph(&self, p: f64, h: f64) -> TableResult<f64> {
        let h = validate_input(h, "enthalpy")?;
        let (hl, hv) = (Self::h_liq(p)?, Self::h_vap(p)?);
        if h > hl && h < hv {
            let x = (h - hl) / LATENT;
            let (sl, sv) = (self.s_liq_p(p)?, self.s_vap_p(p)?);
            Ok(sl + x * (sv - sl))
        } else {
            self.s_pt(p, self.t_ph(p, h)?)
        }
    }

    fn t_ps(&self, p: f64, s: f64) -> TableResult<f64> {
        let s = validate_input(s, "entropy")?;
        let (sl, sv) = (self.s_liq_p(p)?, self.s_vap_p(p)?);
        if s <= sl {
            Ok(T_REF_K * (s / CP_LIQUID).exp() - T_REF_K)
        } else if s >= sv {
            Ok(Self::tsat_k(p)? * ((s - sv) / CP_VAPOR).exp() - T_REF_K)
        } else {
            Self::tsat(p)
        }
    }

    fn h_ps(&self, p: f64, s: f64) -> TableResult<f64> {
        let s = validate_input(s, "entropy")?;
        let (sl, sv) = (self.s_liq_p(p)?, self.s_vap_p(p)?);
        if s > sl && s < sv {
            let x = (s - sl) / (sv - sl);
            Ok(Self::h_liq(p)? + x * LATENT)
        } else {
            self.h_pt(p, self.t_ps(p, s)?)
        }
    }

    fn p_hs(&self, _h: f64, _s: f64) -> TableResult<f64> {
        Err(TableError::NotSupported {
            what: "(h, s) inversion",
        })
    }

    fn t_hs(&self, _h: f64, _s: f64) -> TableResult<f64> {
        Err(TableError::NotSupported {
            what: "(h, s) inversion",
        })
    }

    fn h_px(&self, p: f64, x: f64) -> TableResult<f64> {
        let x = validate_quality(x)?;
        Ok(Self::h_liq(p)? + x * LATENT)
    }

    fn tsat_p(&self, p: f64) -> TableResult<f64> {
        Self::tsat(p)
    }

    fn psat_t(&self, t: f64) -> TableResult<Option<f64>> {
        let t = validate_input(t, "temperature")?;
        if t <= 0.0 {
            return Err(TableError::Domain {
                what: format!("temperature {t} °C below table range"),
            });
        }
        let p = (t / 100.0).powi(4);
        Ok((p <= P_CRIT).then_some(p))
    }

    fn s_liq_p(&self, p: f64) -> TableResult<f64> {
        Ok(CP_LIQUID * (Self::tsat_k(p)? / T_REF_K).ln())
    }

    fn s_vap_p(&self, p: f64) -> TableResult<f64> {
        Ok(self.s_liq_p(p)? + LATENT / Self::tsat_k(p)?)
    }

    fn x_ph(&self, p: f64, h: f64) -> TableResult<f64> {
        let h = validate_input(h, "enthalpy")?;
        Ok((h - Self::h_liq(p)?) / LATENT)
    }
}
