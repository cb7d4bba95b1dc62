//! Cell rendering for the users table.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};
use roster_business::Role;

use crate::utils::colors::{COLOR_GRAY, COLOR_GREEN, COLOR_PURPLE, COLOR_RED};

/// Placeholder for users without a department.
pub const NO_DEPARTMENT: &str = "-";

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

#[inline]
pub fn render_emp_no_cell(ui: &mut Ui, emp_no: &str) {
    ui.label(RichText::new(emp_no).monospace());
}

#[inline]
pub fn render_role_cell(ui: &mut Ui, role: Role) {
    let color = match role {
        Role::Admin => COLOR_PURPLE,
        Role::User => COLOR_GRAY,
    };
    render_badge(ui, role.label(), color);
}

#[inline]
pub fn render_status_cell(ui: &mut Ui, activation: bool) {
    if activation {
        render_badge(ui, "Active", COLOR_GREEN);
    } else {
        render_badge(ui, "Inactive", COLOR_RED);
    }
}

fn render_badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame::NONE
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}
