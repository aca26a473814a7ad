//! Browser and native bindings for the transport, fixture and storage seams.
//!
//! The web build talks to the page through `web-sys` and `reqwasm`; native
//! builds (tests, tooling) use `reqwest` and the local filesystem.

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
#[cfg(target_arch = "wasm32")]
pub use web::*;
