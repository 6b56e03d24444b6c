//! HTTP boundary for the snip short-link store.
//!
//! Translates requests into [`Shortener`](snip_core::Shortener) and
//! [`Resolver`](snip_core::Resolver) calls and their errors into status codes.
//! The core knows nothing about HTTP.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
