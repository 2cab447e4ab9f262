use crate::{CoreError, CoreResult};

pub fn ensure_finite(v: f64, what: &'static str) -> CoreResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: f64, what: &'static str) -> CoreResult<f64> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NotPositive { what })
    }
}

/// Inclusive range check: `lo <= v <= hi`.
pub fn between_inclusive(v: f64, lo: f64, hi: f64) -> bool {
    lo <= v && v <= hi
}

/// Whether `x` is a valid vapor quality.
pub fn is_quality(x: f64) -> bool {
    between_inclusive(x, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert_eq!(ensure_positive(2.0, "p"), Ok(2.0));
        assert_eq!(
            ensure_positive(0.0, "p"),
            Err(CoreError::NotPositive { what: "p" })
        );
        assert!(matches!(
            ensure_positive(f64::INFINITY, "p"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn between_is_inclusive() {
        assert!(between_inclusive(0.5, 0.5, 5.0));
        assert!(between_inclusive(5.0, 0.5, 5.0));
        assert!(!between_inclusive(0.4, 0.5, 5.0));
        assert!(!between_inclusive(5.1, 0.5, 5.0));
    }

    #[test]
    fn quality_bounds() {
        assert!(is_quality(0.0) && is_quality(1.0));
        assert!(!is_quality(-1e-9) && !is_quality(1.0 + 1e-9));
        assert!(!is_quality(f64::NAN));
    }
}
