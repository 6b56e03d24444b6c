use std::sync::Arc;

use snip_core::{LinkRecord, LinkStore, ResolveError, Resolver, ShortCode};
use tracing::{debug, trace};

/// Service for resolving short codes.
///
/// Uses the store's read path only.
#[derive(Debug)]
pub struct ResolverService<S> {
    store: Arc<S>,
}

impl<S> Clone for ResolverService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LinkStore> ResolverService<S> {
    /// Creates a new ResolverService reading from the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Returns
    ///
    /// * `Ok(url)` - The long URL if the code exists
    /// * `Err(NotFound)` - If the code doesn't exist or is malformed
    pub fn resolve_url(&self, code: &str) -> Result<String, ResolveError> {
        self.resolve(code).map(|record| record.long_url)
    }
}

impl<S: LinkStore> Resolver for ResolverService<S> {
    fn resolve(&self, code: &str) -> Result<LinkRecord, ResolveError> {
        trace!(code = %code, "resolving short code");

        // malformed input can never have been stored
        let Ok(short_code) = ShortCode::new(code) else {
            trace!(code = %code, "malformed short code");
            return Err(ResolveError::NotFound(code.to_string()));
        };

        match self.store.lookup(&short_code)? {
            Some(record) => {
                debug!(code = %code, url = %record.long_url, "resolved short code");
                Ok(record)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ResolveError::NotFound(code.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_storage::InMemoryLinkStore;

    fn setup_with_record(code: &str, url: &str) -> ResolverService<InMemoryLinkStore> {
        let store = Arc::new(InMemoryLinkStore::new());
        store.insert(ShortCode::new_unchecked(code), url).unwrap();
        ResolverService::new(store)
    }

    #[test]
    fn resolve_existing_code() {
        let service = setup_with_record("Ab3dEf12", "https://example.com/a");

        let record = service.resolve("Ab3dEf12").unwrap();
        assert_eq!(record.long_url, "https://example.com/a");
        assert_eq!(record.code.as_str(), "Ab3dEf12");
        assert_eq!(
            service.resolve_url("Ab3dEf12").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn resolve_nonexistent_code() {
        let service = ResolverService::new(Arc::new(InMemoryLinkStore::new()));

        let err = service.resolve("zzzzzzzz").unwrap_err();
        assert_eq!(err, ResolveError::NotFound("zzzzzzzz".to_string()));
    }

    #[test]
    fn resolve_malformed_code_is_not_found() {
        let service = setup_with_record("Ab3dEf12", "https://example.com/a");

        for input in ["", "Ab3d/f12", "Ab3dEf12?x=1", "Ab3dEf1 "] {
            let err = service.resolve(input).unwrap_err();
            assert!(matches!(err, ResolveError::NotFound(_)), "{input:?}");
        }
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let service = setup_with_record("Ab3dEf12", "https://example.com/a");

        assert!(service.resolve("ab3def12").is_err());
    }
}
