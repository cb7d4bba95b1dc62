//! Wire and domain types shared by the API client, the page state and the UI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::User, Self::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub dept_id: i64,
    pub dept_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub emp_no: String,
    pub name: String,
    #[serde(default)]
    pub dept: Option<Department>,
    pub user_role: Role,
    pub activation: bool,
}

impl User {
    /// `None` without a department or when its name is blank.
    pub fn dept_name(&self) -> Option<&str> {
        self.dept
            .as_ref()
            .map(|dept| dept.dept_name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn dept_id(&self) -> Option<i64> {
        self.dept.as_ref().map(|dept| dept.dept_id)
    }
}

/// The operator signed in to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: String,
    pub emp_no: String,
}

impl CurrentUser {
    /// `"{name} ({emp_no})"`, or just the name when no employee number is
    /// known.
    pub fn display_name(&self) -> String {
        if self.emp_no.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.emp_no)
        }
    }
}

/// Who is using the console and how requests are authorised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub current_user: CurrentUser,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub emp_no: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    pub user_role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    pub user_role: Role,
    pub activation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}
