//! The four boundary operations over one long-lived resolver and catalog.

use crate::config::{AppConfig, FluidBackend};
use crate::error::{AppError, AppResult};
use sc_balance::{BalanceCatalog, CalculationDescriptor, CalculationResult, Params, standard_catalog};
use sc_steam::{
    CoolPropTable, Cycle, CycleExpansion, Efficiencies, Point, PointId, PropertyTable,
    ResolverSettings, StateResolver,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Minimum number of known properties for a single-point resolution.
const MIN_KNOWN_PROPERTIES: usize = 2;

/// Cycle expansion request: the point map plus optional stage efficiencies [%].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpandRequest {
    pub points: Cycle,
    #[serde(default)]
    pub eta_hp: Option<f64>,
    #[serde(default)]
    pub eta_lp: Option<f64>,
}

/// Calculation request: catalog id, point map and params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub points: Cycle,
    #[serde(default)]
    pub params: Params,
}

/// One row of the point vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointEntry {
    pub id: PointId,
    pub label: &'static str,
}

/// Point identifiers in cycle order with their labels.
pub fn point_vocabulary() -> Vec<PointEntry> {
    PointId::ALL
        .into_iter()
        .map(|id| PointEntry {
            id,
            label: id.label(),
        })
        .collect()
}

/// Service shared by frontends. Stateless across calls.
pub struct CycleService<T> {
    resolver: StateResolver<T>,
    catalog: &'static BalanceCatalog,
}

impl CycleService<CoolPropTable> {
    /// Service backed by the table selected in the config.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;
        let table = match config.fluid {
            FluidBackend::CoolProp => CoolPropTable::new(),
        };
        info!(backend = ?config.fluid, "cycle service ready");
        Ok(Self::new(table, config.resolver_settings()))
    }
}

impl<T: PropertyTable> CycleService<T> {
    pub fn new(table: T, settings: ResolverSettings) -> Self {
        Self {
            resolver: StateResolver::with_settings(table, settings),
            catalog: standard_catalog(),
        }
    }

    pub fn resolver(&self) -> &StateResolver<T> {
        &self.resolver
    }

    /// Resolve a single point.
    ///
    /// Unlike the resolver, this fails: with `InputIncomplete` when fewer than
    /// two properties are given and with `Point` when the table rejects them.
    pub fn resolve_point(&self, point: &Point) -> AppResult<Point> {
        let known = point.known_count();
        if known < MIN_KNOWN_PROPERTIES {
            return Err(AppError::InputIncomplete(format!(
                "at least {} properties are required, got {}",
                MIN_KNOWN_PROPERTIES, known
            )));
        }
        let resolved = self.resolver.resolve(point);
        match resolved.error {
            Some(message) => Err(AppError::Point(message)),
            None => Ok(resolved),
        }
    }

    /// Expand the turbine legs. Point failures are reported on the points.
    pub fn expand_cycle(&self, request: &ExpandRequest) -> CycleExpansion {
        let efficiencies = Efficiencies {
            eta_hp: request.eta_hp,
            eta_lp: request.eta_lp,
        };
        self.resolver.expander().expand(&request.points, efficiencies)
    }

    pub fn list_calculations(&self) -> Vec<CalculationDescriptor> {
        self.catalog.catalog()
    }

    pub fn execute_calculation(&self, request: ExecuteRequest) -> AppResult<CalculationResult> {
        let id = request.id.trim();
        if id.is_empty() {
            return Err(AppError::InputIncomplete(
                "no calculation id was given".to_string(),
            ));
        }
        debug!(calculation = id, params = request.params.len(), "execute request");
        Ok(self.catalog.execute(id, &request.points, request.params)?)
    }
}
