//! Fixed-order composition of balance modules.

use crate::common::enthalpies;
use crate::condenser::CondenserBalance;
use crate::params::{GC, Params, QC};
use crate::preheater::MassBalancePreheater;
use crate::steam_generator::SteamGeneratorPerformance;
use crate::traits::BalanceModule;
use sc_steam::{Cycle, PointId};
use std::ops::ControlFlow;
use tracing::debug;

/// One step of a chain.
pub enum ChainStep {
    /// Run a module; the chain always continues afterwards.
    Module(Box<dyn BalanceModule>),
    /// A prerequisite check that may derive values and may halt the chain.
    Gate {
        name: &'static str,
        apply: fn(&Cycle, &mut Params) -> ControlFlow<()>,
    },
}

/// Threads one [`Params`] map through a fixed sequence of steps.
///
/// Modules whose preconditions are unmet simply leave their outputs absent
/// and the chain moves on. Only a gate can stop the chain, in which case the
/// params computed so far are returned as they stand.
pub struct ChainedSequencer {
    id: &'static str,
    steps: Vec<ChainStep>,
}

impl ChainedSequencer {
    pub const RGV_FROM_CONDENSER: &'static str = "chained_rgv_from_condenser";

    pub fn new(id: &'static str, steps: Vec<ChainStep>) -> Self {
        Self { id, steps }
    }

    /// Boiler performance starting from the condenser.
    ///
    /// condenser balance → condenser flow from `Qc` → preheater mass balance
    /// → steam generator performance.
    pub fn rgv_from_condenser() -> Self {
        Self::new(
            Self::RGV_FROM_CONDENSER,
            vec![
                ChainStep::Module(Box::new(CondenserBalance)),
                ChainStep::Gate {
                    name: "condenser_flow",
                    apply: condenser_flow,
                },
                ChainStep::Module(Box::new(MassBalancePreheater)),
                ChainStep::Module(Box::new(SteamGeneratorPerformance)),
            ],
        )
    }

    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }
}

/// `Gc = Qc/(h6 − h1)`, halting the chain when `Qc` or a positive
/// `h6 − h1` is unavailable. A known `Gc` is kept.
fn condenser_flow(points: &Cycle, params: &mut Params) -> ControlFlow<()> {
    let Some(qc) = params.get(QC) else {
        return ControlFlow::Break(());
    };
    let Some([h6, h1]) = enthalpies(points, [PointId::Six, PointId::One]) else {
        return ControlFlow::Break(());
    };
    let dh = h6 - h1;
    if dh <= 0.0 {
        return ControlFlow::Break(());
    }
    if !params.is_known(GC) {
        params.set(GC, qc / dh);
    }
    ControlFlow::Continue(())
}

impl BalanceModule for ChainedSequencer {
    fn id(&self) -> &'static str {
        self.id
    }

    fn solve(&self, points: &Cycle, params: &mut Params) {
        for step in &self.steps {
            match step {
                ChainStep::Module(module) => module.solve(points, params),
                ChainStep::Gate { name, apply } => {
                    if apply(points, params).is_break() {
                        debug!(chain = self.id, gate = *name, "prerequisite missing, chain halted");
                        return;
                    }
                }
            }
        }
    }
}
