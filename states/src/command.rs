use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect.
///
/// Commands never run implicitly. They are recorded once with
/// `ctx.record_command(..)` and executed with `ctx.dispatch::<C>()`, which
/// hands them a snapshot of the context, an [`Updater`] to report results and
/// the token that cancels them.
///
/// Dispatching a command while a previous run of the same command is still in
/// flight cancels the previous run.
pub trait Command: Send + Sync + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
