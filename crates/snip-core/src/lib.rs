//! Core types and traits for the snip short-link store.
//!
//! This crate provides the data model, the error taxonomy and the seams
//! (store, shortener, resolver) shared by every other crate in the workspace.

pub mod error;
pub mod resolver;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use error::{CoreError, GeneratorError, ResolveError, ShortenerError, StorageError};
pub use resolver::Resolver;
pub use shortcode::{CodeFormat, ShortCode};
pub use shortener::Shortener;
pub use store::{LinkRecord, LinkStore, LinkTransaction};
