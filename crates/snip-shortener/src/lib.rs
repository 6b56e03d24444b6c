//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which turns long URLs into
//! short codes on top of any [`LinkStore`](snip_core::LinkStore) and
//! [`Generator`](snip_generator::Generator).

pub mod service;

pub use service::{ShortenerService, ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
pub use snip_core::{Shortener, ShortenerError};
