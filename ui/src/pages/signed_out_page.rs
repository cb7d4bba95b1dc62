use egui::{Response, Ui};

pub fn signed_out_page(ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("Signed out");
        ui.label("Restart the console to sign in again.");
    })
    .response
}
