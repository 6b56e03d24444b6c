use crate::error::StorageError;
use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored mapping between a short code and its long URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The short code identifying this record.
    pub code: ShortCode,
    /// The original URL that was shortened.
    pub long_url: String,
    /// When the record was committed.
    pub created_at: Timestamp,
}

impl LinkRecord {
    pub fn new(code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            code,
            long_url: long_url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// Operations available inside a store's exclusive critical section.
///
/// Everything done through one `LinkTransaction` is atomic with respect to
/// every other reader and writer of the same store.
pub trait LinkTransaction {
    /// Returns the code already mapped to `long_url`, if any.
    fn find_by_long_url(&self, long_url: &str) -> Option<ShortCode>;

    /// Commits a new record.
    ///
    /// Returns `Err(Conflict)` if the code already exists. A failed insert
    /// leaves the store untouched.
    fn insert(&mut self, code: ShortCode, long_url: &str) -> Result<LinkRecord>;
}

/// The single source of truth for code <-> long URL mappings.
pub trait LinkStore: Send + Sync + 'static {
    /// Retrieves the record for a given short code.
    /// Returns `None` if the code does not exist.
    fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Returns the code already mapped to `long_url`, if any.
    fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortCode>>;

    /// Inserts a new record in its own critical section.
    /// Returns `Err(Conflict)` if the code already exists.
    fn insert(&self, code: ShortCode, long_url: &str) -> Result<LinkRecord> {
        self.transaction(|txn| txn.insert(code, long_url))?
    }

    /// Runs `f` inside one exclusive critical section.
    ///
    /// Check-then-act sequences (dedup lookup, generate, insert) must go
    /// through a single call so that no other writer can interleave.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LinkTransaction) -> T;

    /// Number of stored records.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
