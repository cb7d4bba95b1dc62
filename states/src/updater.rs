use std::any::{Any, TypeId, type_name};
use std::fmt;

use flume::Sender;
use log::debug;
use tokio_util::sync::CancellationToken;

pub(crate) type Mutation = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending change for the state or compute identified by `target`.
pub(crate) struct Update {
    pub(crate) target: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) apply: Mutation,
}

/// Sends changes back to the owning [`StateCtx`](crate::StateCtx).
///
/// Changes are queued and applied by `StateCtx::sync_computes()` on the UI
/// thread. An updater created for a dispatched command carries that command's
/// cancellation token: once the token is cancelled, further changes are
/// dropped instead of queued.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
    cancel: Option<CancellationToken>,
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send, cancel: None }
    }

    pub(crate) fn with_cancel(send: Sender<Update>, cancel: CancellationToken) -> Self {
        Self {
            send,
            cancel: Some(cancel),
        }
    }

    /// Replace the whole value of `T`.
    pub fn set<T: Any + Send>(&self, value: T) {
        self.update::<T>(move |slot| *slot = value);
    }

    /// Modify `T` in place once the update is applied.
    pub fn update<T: Any + Send>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        if self.is_cancelled() {
            debug!("dropping update for {}: task cancelled", type_name::<T>());
            return;
        }

        let apply: Mutation = Box::new(move |target: &mut dyn Any| {
            if let Some(slot) = target.downcast_mut::<T>() {
                f(slot);
            }
        });

        let update = Update {
            target: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            apply,
        };

        if self.send.send(update).is_err() {
            debug!("dropping update for {}: context is gone", type_name::<T>());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
