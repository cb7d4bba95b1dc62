//! Operations the page performs on [`StateCtx`].
//!
//! UI code calls these instead of poking at the states directly, so the
//! ordering rules (loading flag before dispatch, mutation reset on open,
//! re-fetch before close) live in one place.

use log::debug;
use roster_states::StateCtx;

use super::list_compute::{
    DepartmentListCompute, LoadDepartmentsCommand, LoadUsersCommand, UserListCompute,
};
use super::mutation::{
    MutationInput, MutationStatus, SubmitUserMutationCommand, UserMutation, UserMutationCompute,
};
use super::state::{AdminUsersState, ModalOutcome, ModalState};
use crate::{BusinessConfig, FilteredUsersCompute, UserFilter};

/// Record every state, compute and command of the page.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(AdminUsersState::new());
    ctx.add_state(UserFilter::default());
    ctx.add_state(MutationInput::default());

    ctx.record_compute(UserListCompute::default());
    ctx.record_compute(DepartmentListCompute::default());
    ctx.record_compute(UserMutationCompute::default());
    ctx.record_compute(FilteredUsersCompute::default());

    ctx.record_command(LoadUsersCommand);
    ctx.record_command(LoadDepartmentsCommand);
    ctx.record_command(SubmitUserMutationCommand);
}

/// Start the initial loads the first time the page is shown.
///
/// Returns `false` when the page was already mounted.
pub fn mount(ctx: &mut StateCtx) -> bool {
    if ctx.state::<AdminUsersState>().mounted {
        return false;
    }
    ctx.update::<AdminUsersState>(|state| state.mounted = true);

    debug!("admin page mounted, loading users and departments");
    load_users(ctx);
    ctx.dispatch::<LoadDepartmentsCommand>();
    true
}

/// Flag the list as loading and fetch it again.
pub fn load_users(ctx: &mut StateCtx) {
    ctx.updater()
        .update::<UserListCompute>(UserListCompute::begin_loading);
    ctx.sync_computes();
    ctx.dispatch::<LoadUsersCommand>();
}

/// Show `modal` in place of any open dialog.
///
/// Ignored while a mutation is in flight, so its result cannot be mistaken
/// for the new dialog's.
pub fn open_modal(ctx: &mut StateCtx, modal: ModalState) {
    if mutation_in_flight(ctx) {
        debug!("ignoring dialog request while a mutation is in flight");
        return;
    }
    ctx.update::<AdminUsersState>(|state| state.open(modal));
    reset_mutation(ctx);
}

/// Hide the dialog.
///
/// An in-flight mutation keeps running; [`handle_outcome`] re-fetches the
/// list once it succeeds.
pub fn close_modal(ctx: &mut StateCtx) {
    ctx.update::<AdminUsersState>(AdminUsersState::close);
    if mutation_in_flight(ctx) {
        debug!("dialog closed with a mutation in flight");
        return;
    }
    reset_mutation(ctx);
}

/// Send `mutation` on behalf of the open dialog.
pub fn submit(ctx: &mut StateCtx, mutation: UserMutation) {
    let kind = mutation.kind();
    ctx.update::<MutationInput>(|input| input.pending = Some(mutation));
    ctx.updater().set(UserMutationCompute {
        status: MutationStatus::InFlight(kind),
    });
    ctx.sync_computes();
    ctx.dispatch::<SubmitUserMutationCommand>();
}

/// React to what the open dialog reported this frame.
pub fn handle_outcome(ctx: &mut StateCtx, outcome: ModalOutcome) {
    match outcome {
        ModalOutcome::Pending => finish_closed_mutation(ctx),
        ModalOutcome::Closed => close_modal(ctx),
        ModalOutcome::Succeeded => {
            load_users(ctx);
            close_modal(ctx);
        }
    }
}

fn mutation_in_flight(ctx: &StateCtx) -> bool {
    ctx.cached::<UserMutationCompute>()
        .is_some_and(UserMutationCompute::is_in_flight)
}

/// Settle a mutation whose dialog was closed before it finished.
fn finish_closed_mutation(ctx: &mut StateCtx) {
    if ctx.state::<AdminUsersState>().modal.is_open() {
        return;
    }
    let status = ctx
        .cached::<UserMutationCompute>()
        .map(|mutation| mutation.status.clone());
    match status {
        Some(MutationStatus::Succeeded(kind)) => {
            debug!("{kind:?} finished after its dialog closed, reloading users");
            load_users(ctx);
            reset_mutation(ctx);
        }
        Some(MutationStatus::Failed { kind, .. }) => {
            debug!("{kind:?} failed after its dialog closed");
            reset_mutation(ctx);
        }
        _ => {}
    }
}

fn reset_mutation(ctx: &mut StateCtx) {
    ctx.cancel::<SubmitUserMutationCommand>();
    ctx.update::<MutationInput>(|input| input.pending = None);
    ctx.updater().set(UserMutationCompute::default());
    ctx.sync_computes();
}
