use std::any::TypeId;

use crate::{Dep, State, Updater};

/// Ids of the states and computes a [`Compute`] reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeDeps {
    pub states: Vec<TypeId>,
    pub computes: Vec<TypeId>,
}

impl ComputeDeps {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn state<T: State>(mut self) -> Self {
        self.states.push(TypeId::of::<T>());
        self
    }

    pub fn compute<T: Compute>(mut self) -> Self {
        self.computes.push(TypeId::of::<T>());
        self
    }

    pub fn contains(&self, id: &TypeId) -> bool {
        self.states.contains(id) || self.computes.contains(id)
    }
}

/// A cached value stored in [`StateCtx`](crate::StateCtx).
///
/// Two shapes exist:
/// - derived computes declare `deps()` and recalculate in `compute()` whenever
///   one of them changes;
/// - compute-shaped caches declare no deps, keep `compute()` a no-op and are
///   written by commands through an [`Updater`].
///
/// `compute()` must not perform IO: it runs implicitly from `run_computed()`.
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
}
