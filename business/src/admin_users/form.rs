use crate::{CreateUserRequest, ResetPasswordRequest, Role, UpdateUserRequest, User};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Employee number is required.")]
    MissingEmpNo,
    #[error("Name is required.")]
    MissingName,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Text inputs shared by the create, edit and password dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub emp_no: String,
    pub name: String,
    pub password: String,
    pub password_confirm: String,
    pub dept_id: Option<i64>,
    pub role: Role,
    pub activation: bool,
    /// Last validation failure, cleared by a successful submit.
    pub error: Option<FormError>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            emp_no: String::new(),
            name: String::new(),
            password: String::new(),
            password_confirm: String::new(),
            dept_id: None,
            role: Role::User,
            activation: true,
            error: None,
        }
    }
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            emp_no: user.emp_no.clone(),
            name: user.name.clone(),
            dept_id: user.dept_id(),
            role: user.user_role,
            activation: user.activation,
            ..Self::default()
        }
    }

    pub fn create_request(&self) -> Result<CreateUserRequest, FormError> {
        let emp_no = self.emp_no.trim();
        if emp_no.is_empty() {
            return Err(FormError::MissingEmpNo);
        }
        let name = self.required_name()?;
        self.check_password()?;

        Ok(CreateUserRequest {
            emp_no: emp_no.to_owned(),
            name,
            password: self.password.clone(),
            dept_id: self.dept_id,
            user_role: self.role,
        })
    }

    pub fn update_request(&self) -> Result<UpdateUserRequest, FormError> {
        Ok(UpdateUserRequest {
            name: self.required_name()?,
            dept_id: self.dept_id,
            user_role: self.role,
            activation: self.activation,
        })
    }

    pub fn reset_password_request(&self) -> Result<ResetPasswordRequest, FormError> {
        self.check_password()?;
        Ok(ResetPasswordRequest {
            new_password: self.password.clone(),
        })
    }

    fn required_name(&self) -> Result<String, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            Err(FormError::MissingName)
        } else {
            Ok(name.to_owned())
        }
    }

    fn check_password(&self) -> Result<(), FormError> {
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            Err(FormError::PasswordTooShort)
        } else if self.password != self.password_confirm {
            Err(FormError::PasswordMismatch)
        } else {
            Ok(())
        }
    }
}
