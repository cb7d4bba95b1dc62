//! Page-level state of the user administration screen.
//!
//! UI code reads this through `ctx.state::<AdminUsersState>()` and changes it
//! only through the functions in [`super::workflow`].

use std::any::Any;

use roster_states::State;

use super::form::UserForm;
use crate::User;

/// Which dialog is open. Holding one variant at a time keeps the page to a
/// single visible modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Creating,
    Editing(User),
    ResettingPassword(User),
    Deleting(User),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The user the open dialog acts on.
    pub fn target(&self) -> Option<&User> {
        match self {
            Self::Editing(user) | Self::ResettingPassword(user) | Self::Deleting(user) => {
                Some(user)
            }
            Self::Closed | Self::Creating => None,
        }
    }
}

/// What a dialog reports back to the page after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalOutcome {
    /// Still open, nothing to do.
    #[default]
    Pending,
    /// Dismissed without changes.
    Closed,
    /// The mutation went through; the list is stale.
    Succeeded,
}

#[derive(Debug, Default)]
pub struct AdminUsersState {
    /// Set once the initial loads were dispatched.
    pub mounted: bool,
    pub modal: ModalState,
    /// Inputs of the open dialog.
    pub form: UserForm,
}

impl State for AdminUsersState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AdminUsersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever dialog is open with `modal`, seeding its inputs.
    pub fn open(&mut self, modal: ModalState) {
        self.form = match &modal {
            ModalState::Editing(user) => UserForm::from_user(user),
            _ => UserForm::default(),
        };
        self.modal = modal;
    }

    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.form = UserForm::default();
    }
}
