//! Authentication and user-administration handlers.

pub mod admin;
pub mod login;
pub mod logout;
pub mod password;
pub mod signup;
pub mod types;

pub use admin::{add_user, delete_user, list_users};
pub use login::login;
pub use logout::logout;
pub use password::update_password;
pub use signup::signup;
