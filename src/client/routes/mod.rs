pub mod home;
pub mod login;
pub mod not_found;

pub use home::{Home, Index};
pub use login::Login;
pub use not_found::NotFound;
