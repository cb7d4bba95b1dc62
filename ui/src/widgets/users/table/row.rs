use egui_extras::TableRow;
use roster_business::{ModalState, User};

use super::cells::{
    NO_DEPARTMENT, render_emp_no_cell, render_role_cell, render_status_cell, render_text_cell,
};
use crate::utils::colors::COLOR_RED;

/// Renders one user. Returns the dialog requested by an action button.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) -> Option<ModalState> {
    let mut requested = None;

    row.col(|ui| render_emp_no_cell(ui, &user.emp_no));
    row.col(|ui| render_text_cell(ui, &user.name));
    row.col(|ui| render_text_cell(ui, user.dept_name().unwrap_or(NO_DEPARTMENT)));
    row.col(|ui| render_role_cell(ui, user.user_role));
    row.col(|ui| render_status_cell(ui, user.activation));

    row.col(|ui| {
        if ui.button("Edit").clicked() {
            requested = Some(ModalState::Editing(user.clone()));
        }
        if ui.button("Reset password").clicked() {
            requested = Some(ModalState::ResettingPassword(user.clone()));
        }
        if ui
            .button(egui::RichText::new("Delete").color(COLOR_RED))
            .clicked()
        {
            requested = Some(ModalState::Deleting(user.clone()));
        }
    });

    requested
}
