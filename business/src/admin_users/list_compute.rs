//! Loaded user and department lists plus the commands that refresh them.
//!
//! Both lists are compute-shaped caches: no dependencies, a no-op
//! `compute()`, and updates that come only from their load command.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{info, warn};
use roster_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, State, Updater,
};

use crate::api;
use crate::{BusinessConfig, Department, User};

/// Banner text when a failed load carries no message of its own.
pub const USERS_LOAD_FALLBACK: &str = "Failed to load the user list.";

#[derive(Debug, Clone, Default)]
pub struct UserListCompute {
    /// Last successfully loaded list. Kept when a later load fails.
    pub users: Vec<User>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

impl UserListCompute {
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, users: Vec<User>, now: DateTime<Utc>) {
        self.users = users;
        self.is_loading = false;
        self.error = None;
        self.last_loaded_at = Some(now);
    }

    pub fn failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }
}

impl State for UserListCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for UserListCompute {}

#[derive(Debug, Clone, Default)]
pub struct DepartmentListCompute {
    pub departments: Vec<Department>,
}

impl DepartmentListCompute {
    pub fn name_of(&self, dept_id: i64) -> Option<&str> {
        self.departments
            .iter()
            .find(|dept| dept.dept_id == dept_id)
            .map(|dept| dept.dept_name.as_str())
    }
}

impl State for DepartmentListCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for DepartmentListCompute {}

/// Fetch the full user list into [`UserListCompute`].
#[derive(Debug, Default)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            updater.update::<UserListCompute>(UserListCompute::begin_loading);

            match api::get_users(&config).await {
                Ok(users) => {
                    info!("Loaded {} users", users.len());
                    let now = Utc::now();
                    updater.update::<UserListCompute>(move |list| list.loaded(users, now));
                }
                Err(err) => {
                    warn!("Failed to load users: {err}");
                    let message = err
                        .user_message()
                        .unwrap_or(USERS_LOAD_FALLBACK)
                        .to_owned();
                    updater.update::<UserListCompute>(move |list| list.failed(message));
                }
            }
        })
    }
}

/// Fetch the department list into [`DepartmentListCompute`].
///
/// Failures are logged only; the previous list stays in place.
#[derive(Debug, Default)]
pub struct LoadDepartmentsCommand;

impl Command for LoadDepartmentsCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            match api::get_departments(&config).await {
                Ok(departments) => updater.set(DepartmentListCompute { departments }),
                Err(err) => warn!("Failed to load departments: {err}"),
            }
        })
    }
}
