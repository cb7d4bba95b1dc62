use egui::{RichText, Ui};
use roster_business::Session;

use crate::utils::colors::COLOR_GRAY;

/// Title on the left, operator and "Log out" on the right.
///
/// Returns `true` when "Log out" was clicked.
pub fn admin_header(ui: &mut Ui, session: &Session) -> bool {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Admin console");
            ui.label(
                RichText::new("User account management")
                    .small()
                    .color(COLOR_GRAY),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let logout = ui.button("Log out").clicked();
            ui.label(session.current_user.display_name());
            logout
        })
        .inner
    })
    .inner
}
