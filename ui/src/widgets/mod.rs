mod filter_bar;
mod header;
pub mod modals;
pub mod users;

pub use filter_bar::filter_bar;
pub use header::admin_header;
pub use users::users_table;
