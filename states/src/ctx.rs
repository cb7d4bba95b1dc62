use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, warn};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, CommandSnapshot, Compute, ComputeDeps, Dep, Error, State, StateSyncStatus,
    TaskHandle, TaskId, Updater,
};

pub(crate) struct ComputeSlot {
    pub(crate) id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) deps: ComputeDeps,
    pub(crate) value: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

/// Owner of every state, compute and command of a page.
///
/// The UI thread is the only writer. Async commands report back through
/// [`Updater`]s; their changes are applied by [`StateCtx::sync_computes`],
/// which the frame loop calls once per frame.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    state_names: BTreeMap<TypeId, &'static str>,
    computes: Vec<ComputeSlot>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    tasks: JoinSet<()>,
    running: BTreeMap<TypeId, TaskHandle>,
    generation: u64,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.state_names.values().collect::<Vec<_>>())
            .field(
                "computes",
                &self.computes.iter().map(|c| c.type_name).collect::<Vec<_>>(),
            )
            .field("commands", &self.commands.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            state_names: BTreeMap::new(),
            computes: Vec::new(),
            commands: BTreeMap::new(),
            send,
            recv,
            tasks: JoinSet::new(),
            running: BTreeMap::new(),
            generation: 0,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.state_names.insert(id, type_name::<T>());
        self.mark_dependents_dirty(id);
    }

    /// Record a compute. Computes that read other computes must be recorded
    /// after them.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let slot = ComputeSlot {
            id,
            type_name: type_name::<T>(),
            deps: compute.deps(),
            value: Box::new(compute),
            status: StateSyncStatus::Dirty,
        };

        match self.computes.iter_mut().find(|slot| slot.id == id) {
            Some(existing) => *existing = slot,
            None => self.computes.push(slot),
        }
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never added; that is a wiring bug, not a runtime
    /// condition.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access to a state. Computes depending on `T` are marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found(type_name::<T>())))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .iter()
            .find(|slot| slot.id == TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
    }

    pub fn is_dirty<T: Compute>(&self) -> bool {
        self.compute_status(&TypeId::of::<T>()) == Some(StateSyncStatus::Dirty)
    }

    /// An updater without a cancellation token, for code running on the UI
    /// thread or in tests.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Apply every queued update and reap finished tasks.
    pub fn sync_computes(&mut self) {
        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(err) = joined
                && err.is_panic()
            {
                warn!("command task panicked: {err}");
            }
        }

        let pending: Vec<Update> = self.recv.try_iter().collect();
        for update in pending {
            self.apply(update);
        }
    }

    /// Recalculate dirty computes, dependencies first.
    pub fn run_computed(&mut self) {
        let mut budget = self.computes.len();

        while budget > 0 {
            budget -= 1;
            let Some(index) = self.next_ready_compute() else {
                break;
            };

            self.computes[index].status = StateSyncStatus::Clean;
            {
                let slot = &self.computes[index];
                let deps = Dep::new(&self.states, &self.computes);
                slot.value.compute(deps, Updater::new(self.send.clone()));
            }
            self.sync_computes();
        }
    }

    /// Run the recorded command `C` on the current tokio runtime.
    ///
    /// A previous run of `C` that is still in flight is cancelled first.
    /// Must be called from within a tokio runtime context.
    pub fn dispatch<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        let Some(command) = self.commands.get(&id).cloned() else {
            warn!("dispatch ignored: command {} is not recorded", type_name::<C>());
            return;
        };

        if let Some(previous) = self.running.remove(&id) {
            debug!(
                "cancelling {} generation {}",
                type_name::<C>(),
                previous.id().generation()
            );
            previous.cancel();
        }

        self.generation += 1;
        let token = CancellationToken::new();
        let handle = TaskHandle::new(TaskId::new(id, self.generation), token.clone());
        let updater = Updater::with_cancel(self.send.clone(), token.clone());

        let future = command.run(self.snapshot(), updater, token.clone());
        self.tasks.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = future => {}
            }
        });

        debug!("dispatched {} generation {}", type_name::<C>(), self.generation);
        self.running.insert(id, handle);
    }

    /// Cancel the in-flight run of `C`, if any. Its later updates are dropped.
    pub fn cancel<C: Command>(&mut self) {
        if let Some(handle) = self.running.remove(&TypeId::of::<C>()) {
            debug!("cancelled {}", type_name::<C>());
            handle.cancel();
        }
    }

    /// Number of spawned tasks not yet reaped.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Await every in-flight task, applying updates as each one finishes.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(err) = joined
                && err.is_panic()
            {
                warn!("command task panicked: {err}");
            }
            self.sync_computes();
        }
        self.sync_computes();
    }

    /// Cancel every running command and discard updates not yet applied.
    ///
    /// Results that arrive afterwards are dropped by their cancelled
    /// updaters.
    pub fn shutdown(&mut self) {
        for (_, handle) in std::mem::take(&mut self.running) {
            handle.cancel();
        }
        self.tasks.abort_all();

        let discarded = self.recv.try_iter().count();
        if discarded > 0 {
            debug!("shutdown discarded {discarded} pending updates");
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snap.insert(*id, value);
            }
        }
        for slot in &self.computes {
            if let Some(value) = slot.value.snapshot() {
                snap.insert(slot.id, value);
            }
        }
        snap
    }

    fn apply(&mut self, update: Update) {
        let Update {
            target,
            type_name,
            apply,
        } = update;

        if let Some(state) = self.states.get_mut(&target) {
            apply(state.as_any_mut());
        } else if let Some(slot) = self.computes.iter_mut().find(|slot| slot.id == target) {
            apply(slot.value.as_any_mut());
        } else {
            warn!("update for {type_name} ignored: not registered");
            return;
        }

        self.mark_dependents_dirty(target);
    }

    fn compute_status(&self, id: &TypeId) -> Option<StateSyncStatus> {
        self.computes
            .iter()
            .find(|slot| slot.id == *id)
            .map(|slot| slot.status)
    }

    fn next_ready_compute(&self) -> Option<usize> {
        self.computes.iter().position(|slot| {
            slot.status == StateSyncStatus::Dirty
                && slot
                    .deps
                    .computes
                    .iter()
                    .all(|dep| self.compute_status(dep) != Some(StateSyncStatus::Dirty))
        })
    }

    fn mark_dependents_dirty(&mut self, changed: TypeId) {
        let mut queue = vec![changed];
        while let Some(id) = queue.pop() {
            for slot in &mut self.computes {
                if slot.status == StateSyncStatus::Clean && slot.deps.contains(&id) {
                    slot.status = StateSyncStatus::Dirty;
                    queue.push(slot.id);
                }
            }
        }
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        self.shutdown();
    }
}
