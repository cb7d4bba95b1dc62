//! Handles for dispatched commands.
//!
//! Every `ctx.dispatch::<C>()` spawns one task and records a [`TaskHandle`]
//! for it. The handle owns the `CancellationToken` shared with the command's
//! [`Updater`](crate::Updater), so cancelling the handle both stops the task
//! at its next await point and discards anything it reports afterwards.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies one run of a command: the command type plus a generation that
/// grows with every dispatch made by the same context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The command type that spawned the task.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Cooperative cancellation handle for a running command.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Request cancellation. The task stops at its next cancellation point;
    /// it is not aborted forcibly.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
