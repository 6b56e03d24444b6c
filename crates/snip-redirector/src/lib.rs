//! Resolution of short codes back to their long URLs.
//!
//! [`ResolverService`] is read-only: it never takes the store's exclusive
//! lock, so any number of resolutions can run side by side.

pub mod service;

pub use service::ResolverService;
pub use snip_core::{ResolveError, Resolver};
