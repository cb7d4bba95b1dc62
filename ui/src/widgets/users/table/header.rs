use egui_extras::TableRow;

const HEADERS: [&str; 6] = [
    "Employee No.",
    "Name",
    "Department",
    "Role",
    "Status",
    "Actions",
];

#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            ui.strong(label);
        });
    }
}
