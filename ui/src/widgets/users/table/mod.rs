mod cells;
pub mod columns;
pub mod header;
pub mod row;
