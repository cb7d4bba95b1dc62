use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::ctx::ComputeSlot;
use crate::{Compute, State};

/// Read-only view over the context handed to [`Compute::compute`].
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a [ComputeSlot],
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a [ComputeSlot],
    ) -> Self {
        Self { states, computes }
    }

    /// # Panics
    /// Panics if `T` was never added to the context.
    pub fn state<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never recorded in the context.
    pub fn compute<T: Compute>(&self) -> &'a T {
        self.computes
            .iter()
            .find(|slot| slot.id == TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("compute {} is not registered", type_name::<T>()))
    }
}
