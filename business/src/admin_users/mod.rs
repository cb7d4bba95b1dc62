//! User administration page.
//!
//! This module is the single home for:
//! - page state (modal slot, dialog inputs) stored in `StateCtx`
//! - compute-shaped caches for the loaded lists and the running mutation
//! - the commands that talk to the API
//!
//! UI code under `roster_ui::widgets` must not define domain `State`/`Compute`/`Command`.
//! It reads via `ctx.state::<T>()` / `ctx.cached::<T>()` and changes things through
//! [`workflow`].

pub mod form;
pub mod list_compute;
pub mod mutation;
pub mod state;
pub mod workflow;


pub use form::{FormError, MIN_PASSWORD_LEN, UserForm};
pub use list_compute::{
    DepartmentListCompute, LoadDepartmentsCommand, LoadUsersCommand, USERS_LOAD_FALLBACK,
    UserListCompute,
};
pub use mutation::{
    MutationInput, MutationKind, MutationStatus, SubmitUserMutationCommand, UserMutation,
    UserMutationCompute,
};
pub use state::{AdminUsersState, ModalOutcome, ModalState};
