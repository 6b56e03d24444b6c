use snip_core::{LinkStore, LinkTransaction, ShortCode, Shortener, ShortenerError, StorageError};
use snip_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Configures a [`ShortenerService`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ShortenerSettings {
    /// Candidate codes tried per request before failing with
    /// [`ShortenerError::ExhaustedRetries`]. At least one attempt is always made.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `LinkStore` and a `Generator` to handle:
/// - Input validation
/// - Deduplication (one code per long URL)
/// - Short code generation with bounded collision retry
///
/// The dedup check, every generation attempt and the final insert run inside
/// one store transaction, so two concurrent requests for the same URL can
/// never both create a record.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: G,
    settings: ShortenerSettings,
}

impl<S: LinkStore, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(store: Arc<S>, generator: G) -> Self {
        Self::with_settings(store, generator, ShortenerSettings::default())
    }

    pub fn with_settings(store: Arc<S>, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            store,
            generator,
            settings,
        }
    }

    /// Returns the store this service writes to.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn validate_url(url: &str) -> Result<(), ShortenerError> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Body of the critical section. Must only be called with the store's
    /// exclusive transaction.
    fn shorten_locked(
        &self,
        txn: &mut dyn LinkTransaction,
        long_url: &str,
    ) -> Result<ShortCode, ShortenerError> {
        if let Some(existing) = txn.find_by_long_url(long_url) {
            trace!(code = %existing, "long url already shortened");
            return Ok(existing);
        }

        let attempts = self.settings.max_attempts.max(1);
        for attempt in 1..=attempts {
            let candidate: ShortCode = self.generator.generate()?.into();

            match txn.insert(candidate, long_url) {
                Ok(record) => {
                    debug!(code = %record.code, attempt, "created short link");
                    return Ok(record.code);
                }
                Err(StorageError::Conflict(code)) => {
                    warn!(code = %code, attempt, max_attempts = attempts, "short code collision");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ShortenerError::ExhaustedRetries { attempts })
    }
}

impl<S: LinkStore, G: Generator> Shortener for ShortenerService<S, G> {
    fn shorten(&self, long_url: &str) -> Result<ShortCode, ShortenerError> {
        Self::validate_url(long_url)?;

        self.store
            .transaction(|txn| self.shorten_locked(txn, long_url))?
    }
}
