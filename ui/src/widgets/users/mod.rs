//! Users table.
//!
//! Split like this:
//! - `table::columns`: column widths
//! - `table::header`: header labels
//! - `table::row`: one user per row
//! - `table::cells`: per-column cell rendering

mod table;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::{ModalState, User};

use table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use table::header::render_table_header;
use table::row::render_user_row;

/// Renders `users` and returns the dialog a row button asked for.
pub fn users_table(ui: &mut Ui, users: &[User]) -> Option<ModalState> {
    let mut requested = None;

    let builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));

    table_columns()
        .into_iter()
        .fold(builder, TableBuilder::column)
        .header(HEADER_HEIGHT, |mut header| render_table_header(&mut header))
        .body(|mut body| {
            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    if let Some(modal) = render_user_row(&mut row, user) {
                        requested = Some(modal);
                    }
                });
            }
        });

    requested
}
