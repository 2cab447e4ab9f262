//! Core trait for balance modules.

use crate::params::Params;
use sc_steam::Cycle;

/// One conservation law over the plant streams.
///
/// Modules are deterministic and stateless. `solve` reads enthalpies from
/// `points` and fills in whichever unknowns the known params allow, trying
/// candidate unknowns in a fixed priority and stopping at the first one that
/// can be computed. Unmet preconditions leave `params` unchanged.
pub trait BalanceModule: Send + Sync {
    /// Catalog identifier.
    fn id(&self) -> &'static str;

    /// Solve in place.
    fn solve(&self, points: &Cycle, params: &mut Params);
}
