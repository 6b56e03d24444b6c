pub mod memory;

pub use memory::InMemoryLinkStore;
pub use snip_core::{LinkRecord, LinkStore, LinkTransaction, StorageError};
