//! Registry of calculations available to frontends.

use crate::chained::ChainedSequencer;
use crate::condenser::CondenserBalance;
use crate::error::{CatalogError, CatalogResult};
use crate::net_power::NetPower;
use crate::params::Params;
use crate::preheater::MassBalancePreheater;
use crate::regeneration::RegenerativeGain;
use crate::steam_generator::SteamGeneratorPerformance;
use crate::traits::BalanceModule;
use sc_steam::Cycle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Point properties and params a calculation reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInputs {
    pub points: &'static [&'static str],
    pub params: &'static [&'static str],
}

/// Static metadata describing one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub inputs: CalculationInputs,
    pub outputs: &'static [&'static str],
    pub description: &'static str,
}

/// Updated params returned by [`BalanceCatalog::execute`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub params: Params,
}

/// A registered calculation. An entry without a module is listed but cannot
/// be executed.
pub struct CatalogEntry {
    pub descriptor: CalculationDescriptor,
    pub module: Option<Box<dyn BalanceModule>>,
}

impl CatalogEntry {
    pub fn new(descriptor: CalculationDescriptor, module: impl BalanceModule + 'static) -> Self {
        Self {
            descriptor,
            module: Some(Box::new(module)),
        }
    }

    /// Listed for discovery only.
    pub fn planned(descriptor: CalculationDescriptor) -> Self {
        Self {
            descriptor,
            module: None,
        }
    }
}

/// Immutable, ordered registry of calculations.
pub struct BalanceCatalog {
    entries: Vec<CatalogEntry>,
}

pub const MASS_BALANCE_PREHEATER: CalculationDescriptor = CalculationDescriptor {
    id: MassBalancePreheater::ID,
    name: "Preheater mass balance",
    inputs: CalculationInputs {
        points: &["h2", "hn", "hx", "hn_prime"],
        params: &["Gv", "Gx", "Gc"],
    },
    outputs: &["Gv", "Gx", "Gc"],
    description: "Computes the mass flows Gv, Gx and Gc. Provide one of the three to obtain the other two.",
};

pub const CONDENSER_BALANCE: CalculationDescriptor = CalculationDescriptor {
    id: CondenserBalance::ID,
    name: "Condenser energy balance",
    inputs: CalculationInputs {
        points: &["h1", "h6"],
        params: &["Gc", "Qc", "W", "ts", "te", "Cp"],
    },
    outputs: &["Qc", "W", "ts", "te"],
    description: "Computes the heat rejected (Qc) or the state of the cooling water.",
};

pub const STEAM_GENERATOR_PERFORMANCE: CalculationDescriptor = CalculationDescriptor {
    id: SteamGeneratorPerformance::ID,
    name: "Steam generator performance",
    inputs: CalculationInputs {
        points: &["h3", "h4", "h5", "hn"],
        params: &["Gv", "Gc", "rgv", "Gco", "Pci"],
    },
    outputs: &["rgv", "Gco"],
    description: "Computes the boiler efficiency (rgv) or the fuel consumption (Gco).",
};

pub const NET_POWER: CalculationDescriptor = CalculationDescriptor {
    id: NetPower::ID,
    name: "Cycle net power",
    inputs: CalculationInputs {
        points: &["h3", "h4", "h5", "h6"],
        params: &["Gv", "Gc"],
    },
    outputs: &["net_power_kw"],
    description: "Computes the net power at the generator terminals.",
};

pub const REGENERATIVE_GAIN: CalculationDescriptor = CalculationDescriptor {
    id: RegenerativeGain::ID,
    name: "Regeneration gain",
    inputs: CalculationInputs {
        points: &["h1", "h2", "h3", "h4", "h5", "h6", "hn"],
        params: &["Gv", "Gc"],
    },
    outputs: &["regen_gain_pct"],
    description: "Compares the regenerative cycle efficiency with a simple cycle without extraction.",
};

pub const CHAINED_RGV_FROM_CONDENSER: CalculationDescriptor = CalculationDescriptor {
    id: ChainedSequencer::RGV_FROM_CONDENSER,
    name: "Boiler efficiency from condenser data",
    inputs: CalculationInputs {
        points: &["h1", "h2", "h3", "h4", "h5", "h6", "hn", "hx", "hn_prime"],
        params: &["Qc", "W", "ts", "te", "Cp", "Gco", "Pci", "rgv"],
    },
    outputs: &["Qc", "Gc", "Gx", "Gv", "rgv", "Gco"],
    description: "Runs the condenser balance, derives Gc from Qc, then the preheater mass balance and the steam generator performance.",
};

impl BalanceCatalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Every calculation this crate implements.
    pub fn standard() -> Self {
        Self::from_entries(vec![
            CatalogEntry::new(MASS_BALANCE_PREHEATER, MassBalancePreheater),
            CatalogEntry::new(CONDENSER_BALANCE, CondenserBalance),
            CatalogEntry::new(STEAM_GENERATOR_PERFORMANCE, SteamGeneratorPerformance),
            CatalogEntry::new(NET_POWER, NetPower),
            CatalogEntry::new(REGENERATIVE_GAIN, RegenerativeGain),
            CatalogEntry::new(
                CHAINED_RGV_FROM_CONDENSER,
                ChainedSequencer::rgv_from_condenser(),
            ),
        ])
    }

    /// Descriptors in registration order.
    pub fn catalog(&self) -> Vec<CalculationDescriptor> {
        self.entries.iter().map(|e| e.descriptor).collect()
    }

    pub fn descriptor(&self, id: &str) -> Option<&CalculationDescriptor> {
        self.entry(id).map(|e| &e.descriptor)
    }

    fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.descriptor.id == id)
    }

    /// Run a calculation on caller-owned params and return the updated map.
    pub fn execute(
        &self,
        id: &str,
        points: &Cycle,
        mut params: Params,
    ) -> CatalogResult<CalculationResult> {
        let entry = self
            .entry(id)
            .ok_or_else(|| CatalogError::UnknownCalculationId(id.to_string()))?;
        let module = entry
            .module
            .as_deref()
            .ok_or_else(|| CatalogError::CalculationNotImplemented(id.to_string()))?;

        debug!(calculation = id, "executing");
        module.solve(points, &mut params);
        Ok(CalculationResult { params })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for BalanceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.descriptor.id))
            .finish()
    }
}

/// Process-wide standard catalog, built on first use.
pub fn standard_catalog() -> &'static BalanceCatalog {
    static CATALOG: OnceLock<BalanceCatalog> = OnceLock::new();
    CATALOG.get_or_init(BalanceCatalog::standard)
}
