//! Client-side filtering of the loaded user list.

use std::any::Any;

use roster_states::{Compute, ComputeDeps, Dep, State, Updater};

use crate::admin_users::UserListCompute;
use crate::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    User,
    Admin,
}

impl RoleFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::User, Self::Admin];

    pub fn matches(self, role: Role) -> bool {
        match self {
            Self::All => true,
            Self::User => role == Role::User,
            Self::Admin => role == Role::Admin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All roles",
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    pub fn matches(self, activation: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => activation,
            Self::Inactive => !activation,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All statuses",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Filter criteria edited by the filter bar. Lives as long as the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub search: String,
    pub dept_id: Option<i64>,
    pub role: RoleFilter,
    pub status: StatusFilter,
}

impl UserFilter {
    /// Whether any criterion can exclude a user.
    pub fn is_narrowing(&self) -> bool {
        !self.search.is_empty()
            || self.dept_id.is_some()
            || self.role != RoleFilter::All
            || self.status != StatusFilter::All
    }

    pub fn matches(&self, user: &User) -> bool {
        self.matches_search(user)
            && self
                .dept_id
                .is_none_or(|dept_id| user.dept_id() == Some(dept_id))
            && self.role.matches(user.user_role)
            && self.status.matches(user.activation)
    }

    fn matches_search(&self, user: &User) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        user.name.to_lowercase().contains(&needle) || user.emp_no.to_lowercase().contains(&needle)
    }
}

impl State for UserFilter {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Users matching every criterion of `filter`, in source order.
pub fn filter_users<'a>(users: &'a [User], filter: &UserFilter) -> Vec<&'a User> {
    users.iter().filter(|user| filter.matches(user)).collect()
}

/// [`filter_users`] over the loaded list, recalculated only when the list or
/// the criteria change.
#[derive(Debug, Clone, Default)]
pub struct FilteredUsersCompute {
    pub users: Vec<User>,
    /// Size of the list the filter ran over.
    pub total: usize,
    pub narrowing: bool,
}

impl State for FilteredUsersCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for FilteredUsersCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
            .state::<UserFilter>()
            .compute::<UserListCompute>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let filter = deps.state::<UserFilter>();
        let list = deps.compute::<UserListCompute>();

        updater.set(Self {
            users: filter_users(&list.users, filter)
                .into_iter()
                .cloned()
                .collect(),
            total: list.users.len(),
            narrowing: filter.is_narrowing(),
        });
    }
}
