//! Authentication and authorization: user store, session tokens, and the
//! role policy table.

pub mod handlers;
pub mod policy;
pub mod sessions;
pub mod users;

pub use handlers::{add_user, delete_user, list_users, login, logout, signup, update_password};
