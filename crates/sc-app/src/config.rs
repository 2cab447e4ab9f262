//! Application configuration.

use crate::error::{AppError, AppResult};
use sc_steam::{ResolverSettings, SATURATION_TOLERANCE_C};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Property backend used to evaluate water states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FluidBackend {
    #[default]
    CoolProp,
}

/// Settings read from a YAML file. Every field has a default, so an empty
/// file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max |t(p,h) − tsat(p)| [°C] for a state to count as saturated.
    pub saturation_tolerance_c: f64,
    pub fluid: FluidBackend,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            saturation_tolerance_c: SATURATION_TOLERANCE_C,
            fluid: FluidBackend::CoolProp,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // serde_yaml reads an empty document as null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| AppError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let tol = self.saturation_tolerance_c;
        if !tol.is_finite() || tol <= 0.0 {
            return Err(AppError::InvalidConfig(format!(
                "saturation_tolerance_c must be positive and finite, got {}",
                tol
            )));
        }
        Ok(())
    }

    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            saturation_tolerance_c: self.saturation_tolerance_c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml("saturation_tolerance_c: 0.5\n").unwrap();
        assert_eq!(config.saturation_tolerance_c, 0.5);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.fluid, FluidBackend::CoolProp);
        assert_eq!(config.resolver_settings().saturation_tolerance_c, 0.5);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let err = AppConfig::from_yaml("saturation_tolerance_c: 0.0").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = AppConfig::from_yaml("fluid: refprop").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("sc_app_config_does_not_exist.yaml");
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }
}
