//! Typed state container for immediate-mode UIs.
//!
//! A [`StateCtx`] owns three kinds of values:
//! - [`State`]: plain data the UI reads and edits;
//! - [`Compute`]: cached values, either derived from states or written by
//!   commands;
//! - [`Command`]: async side effects dispatched on demand.
//!
//! The frame loop calls `sync_computes()` and `run_computed()` once per frame
//! before drawing.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;

pub use tokio_util::sync::CancellationToken;
