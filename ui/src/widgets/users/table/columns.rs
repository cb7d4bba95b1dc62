//! Column definitions for the users table.

use egui_extras::Column;

pub const EMP_NO_WIDTH: f32 = 110.0;
pub const DEPT_WIDTH: f32 = 140.0;
pub const BADGE_WIDTH: f32 = 90.0;
pub const ACTIONS_WIDTH: f32 = 250.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Employee number, name, department, role, status, actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(EMP_NO_WIDTH),
        Column::remainder().at_least(120.0), // Name - flexible
        Column::exact(DEPT_WIDTH),
        Column::exact(BADGE_WIDTH),
        Column::exact(BADGE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
