//! Presence helpers shared by the balance modules.

use crate::params::Params;
use sc_steam::{Cycle, PointId};

/// Enthalpies of the given points, or `None` if any is unknown.
pub fn enthalpies<const N: usize>(points: &Cycle, ids: [PointId; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, id) in out.iter_mut().zip(ids) {
        *slot = points.h(id)?;
    }
    Some(out)
}

/// Values of the given params, or `None` if any is absent.
pub fn known<const N: usize>(params: &Params, names: [&str; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, name) in out.iter_mut().zip(names) {
        *slot = params.get(name)?;
    }
    Some(out)
}
