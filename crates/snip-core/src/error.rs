use thiserror::Error;

/// Errors related to the core data model.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors produced while generating candidate short codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),
    #[error("code space exhausted after {issued} codes")]
    Exhausted { issued: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The short code is already taken. Expected but rare for random codes.
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("long url is already mapped to {0}")]
    DuplicateLongUrl(String),
    #[error("short code does not match store format: {0}")]
    InvalidCode(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("no free short code after {attempts} attempts, consider a longer code length")]
    ExhaustedRetries { attempts: usize },
    #[error("code generation failed: {0}")]
    Generator(#[from] GeneratorError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ShortenerError {
    /// Returns `true` when the caller supplied bad input.
    ///
    /// Everything else is a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ShortenerError::InvalidUrl(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
