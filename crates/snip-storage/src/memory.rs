use parking_lot::RwLock;
use snip_core::store::Result;
use snip_core::{CodeFormat, LinkRecord, LinkStore, LinkTransaction, ShortCode, StorageError};
use std::collections::HashMap;
use tracing::trace;

/// Both indexes of the store. Always mutated together, under one write lock.
#[derive(Debug, Default)]
struct Indexes {
    by_code: HashMap<ShortCode, LinkRecord>,
    by_long_url: HashMap<String, ShortCode>,
}

impl LinkTransaction for Indexes {
    fn find_by_long_url(&self, long_url: &str) -> Option<ShortCode> {
        self.by_long_url.get(long_url).cloned()
    }

    fn insert(&mut self, code: ShortCode, long_url: &str) -> Result<LinkRecord> {
        if self.by_code.contains_key(&code) {
            return Err(StorageError::Conflict(code.to_string()));
        }
        if let Some(existing) = self.by_long_url.get(long_url) {
            return Err(StorageError::DuplicateLongUrl(existing.to_string()));
        }

        let record = LinkRecord::new(code.clone(), long_url);
        self.by_long_url.insert(long_url.to_owned(), code.clone());
        self.by_code.insert(code, record.clone());
        Ok(record)
    }
}

/// A transaction that enforces the store's code format before inserting.
struct FormatChecked<'a> {
    format: CodeFormat,
    indexes: &'a mut Indexes,
}

impl LinkTransaction for FormatChecked<'_> {
    fn find_by_long_url(&self, long_url: &str) -> Option<ShortCode> {
        self.indexes.find_by_long_url(long_url)
    }

    fn insert(&mut self, code: ShortCode, long_url: &str) -> Result<LinkRecord> {
        self.format
            .validate(&code)
            .map_err(|e| StorageError::InvalidCode(e.to_string()))?;
        self.indexes.insert(code, long_url)
    }
}

/// In-memory implementation of [`LinkStore`].
///
/// Holds a primary index (code -> record) and a secondary index
/// (long URL -> code) behind a single [`RwLock`]. Lookups take the shared
/// lock; transactions take the exclusive lock for their whole duration, so
/// a dedup check followed by an insert cannot interleave with another writer.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    format: CodeFormat,
    indexes: RwLock<Indexes>,
}

impl InMemoryLinkStore {
    /// Creates a new store accepting codes of the default length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store accepting codes of the given format.
    pub fn with_format(format: CodeFormat) -> Self {
        Self {
            format,
            indexes: RwLock::default(),
        }
    }

    /// Creates a new store with room for `capacity` records.
    pub fn with_capacity(format: CodeFormat, capacity: usize) -> Self {
        Self {
            format,
            indexes: RwLock::new(Indexes {
                by_code: HashMap::with_capacity(capacity),
                by_long_url: HashMap::with_capacity(capacity),
            }),
        }
    }

    pub fn format(&self) -> CodeFormat {
        self.format
    }
}

impl LinkStore for InMemoryLinkStore {
    fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.indexes.read().by_code.get(code).cloned())
    }

    fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortCode>> {
        Ok(self.indexes.read().find_by_long_url(long_url))
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LinkTransaction) -> T,
    {
        let mut guard = self.indexes.write();
        trace!(records = guard.by_code.len(), "entered exclusive section");
        let mut txn = FormatChecked {
            format: self.format,
            indexes: &mut *guard,
        };
        Ok(f(&mut txn))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.indexes.read().by_code.len())
    }
}
