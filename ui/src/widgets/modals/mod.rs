//! The four dialogs of the user page.
//!
//! Each dialog owns its validation and submits one mutation. The page only
//! learns the [`ModalOutcome`]; mutation failures stay inside the dialog.

mod create;
mod delete;
mod edit;
mod reset_password;

use egui::{ComboBox, RichText, Ui};
use roster_business::admin_users::{FormError, UserMutation, workflow};
use roster_business::{
    AdminUsersState, Department, DepartmentListCompute, ModalOutcome, ModalState, Role,
    UserMutationCompute,
};
use roster_states::StateCtx;

pub use create::create_user_modal;
pub use delete::delete_user_modal;
pub use edit::edit_user_modal;
pub use reset_password::reset_password_modal;

use crate::utils::colors::COLOR_RED;

pub const NO_DEPARTMENT_OPTION: &str = "No department";

/// Show whichever dialog is open.
pub fn show_modal(ctx: &mut StateCtx, ui: &mut Ui) -> ModalOutcome {
    match ctx.state::<AdminUsersState>().modal.clone() {
        ModalState::Closed => ModalOutcome::Pending,
        ModalState::Creating => create_user_modal(ctx, ui),
        ModalState::Editing(user) => edit_user_modal(ctx, &user, ui),
        ModalState::ResettingPassword(user) => reset_password_modal(ctx, &user, ui),
        ModalState::Deleting(user) => delete_user_modal(ctx, &user, ui),
    }
}

fn mutation(ctx: &StateCtx) -> UserMutationCompute {
    ctx.cached::<UserMutationCompute>()
        .cloned()
        .unwrap_or_default()
}

fn departments(ctx: &StateCtx) -> Vec<Department> {
    ctx.cached::<DepartmentListCompute>()
        .map(|list| list.departments.clone())
        .unwrap_or_default()
}

/// Apply what the dialog decided this frame.
///
/// Callers pass `open` as still true while a request is in flight; such a
/// dialog cannot be dismissed.
fn finish(
    ctx: &mut StateCtx,
    open: bool,
    outcome: ModalOutcome,
    submit: Option<UserMutation>,
) -> ModalOutcome {
    if let Some(mutation) = submit {
        workflow::submit(ctx, mutation);
    }
    if open { outcome } else { ModalOutcome::Closed }
}

/// Validation error, server error or progress, whichever applies.
fn feedback(ui: &mut Ui, form_error: Option<FormError>, mutation: &UserMutationCompute) {
    if let Some(error) = form_error {
        ui.colored_label(COLOR_RED, error.to_string());
    } else if let Some(message) = mutation.error_message() {
        ui.colored_label(COLOR_RED, RichText::new(message));
    } else if mutation.is_in_flight() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Saving...");
        });
    }
}

fn department_combo(
    ui: &mut Ui,
    id_salt: &str,
    dept_id: &mut Option<i64>,
    departments: &[Department],
) {
    let selected = dept_id
        .and_then(|id| departments.iter().find(|dept| dept.dept_id == id))
        .map_or(NO_DEPARTMENT_OPTION, |dept| dept.dept_name.as_str())
        .to_owned();

    ComboBox::from_id_salt(id_salt)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(dept_id, None, NO_DEPARTMENT_OPTION);
            for dept in departments {
                ui.selectable_value(dept_id, Some(dept.dept_id), dept.dept_name.as_str());
            }
        });
}

fn role_combo(ui: &mut Ui, id_salt: &str, role: &mut Role) {
    ComboBox::from_id_salt(id_salt)
        .selected_text(role.label())
        .show_ui(ui, |ui| {
            for option in Role::ALL {
                ui.selectable_value(role, option, option.label());
            }
        });
}
