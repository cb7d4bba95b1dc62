//! Pages of the application:
//! - `admin_page`: user management for a signed-in operator
//! - `signed_out_page`: shown after "Log out"

mod admin_page;
mod signed_out_page;

pub use admin_page::{AdminPageEvent, admin_page};
pub use signed_out_page::signed_out_page;
