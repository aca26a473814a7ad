pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod navbar;
pub mod notify;
pub mod platform;
pub mod router;
pub mod routes;
pub mod session;
pub mod util;

pub use app::App;
