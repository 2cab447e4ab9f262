//! Plant-stream parameters shared between balance modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Live steam flow through the HP turbine [kg/h].
pub const GV: &str = "Gv";
/// Extraction flow to the preheater [kg/h].
pub const GX: &str = "Gx";
/// Flow through the LP turbine and condenser [kg/h].
pub const GC: &str = "Gc";
/// Heat rejected in the condenser [kcal/h].
pub const QC: &str = "Qc";
/// Cooling water flow [kg/h].
pub const W: &str = "W";
/// Cooling water outlet temperature [°C].
pub const TS: &str = "ts";
/// Cooling water inlet temperature [°C].
pub const TE: &str = "te";
/// Cooling water heat capacity [kcal/(kg·K)].
pub const CP: &str = "Cp";
/// Steam generator efficiency [%].
pub const RGV: &str = "rgv";
/// Fuel consumption [kg/h].
pub const GCO: &str = "Gco";
/// Fuel lower heating value [kcal/kg].
pub const PCI: &str = "Pci";
/// Net electrical power [kW].
pub const NET_POWER_KW: &str = "net_power_kw";
/// Relative efficiency gain of the regenerative cycle [%].
pub const REGEN_GAIN_PCT: &str = "regen_gain_pct";

/// Named numeric parameters, each known or absent.
///
/// A missing key and an explicit `null` both read as absent. Names are
/// free-form so callers can carry values no module consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, Option<f64>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for literals in tests and callers.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), Some(value));
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Known entries only, in name order.
    pub fn known(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values
            .iter()
            .filter_map(|(name, value)| value.map(|v| (name.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}
