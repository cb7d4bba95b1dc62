//! Business layer of the Roster admin console: domain model, API client,
//! configuration and the state/compute/command set of the user page.

pub mod admin_users;
pub mod api;
mod config;
mod filter;
pub mod http;
mod model;

#[cfg(test)]
mod test_utils;

pub use admin_users::{
    AdminUsersState, DepartmentListCompute, LoadDepartmentsCommand, LoadUsersCommand,
    ModalOutcome, ModalState, UserListCompute, UserMutationCompute,
};
pub use api::ApiError;
pub use config::{AppConfig, BusinessConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use filter::{FilteredUsersCompute, RoleFilter, StatusFilter, UserFilter, filter_users};
pub use model::{
    CreateUserRequest, CurrentUser, Department, ResetPasswordRequest, Role, Session,
    UpdateUserRequest, User,
};
