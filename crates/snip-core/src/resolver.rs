use crate::error::ResolveError;
use crate::store::LinkRecord;

pub trait Resolver: Send + Sync + 'static {
    /// Resolves a short code to its stored record.
    ///
    /// Returns `Err(NotFound)` for unknown codes and for input that is not a
    /// well-formed short code.
    fn resolve(&self, code: &str) -> Result<LinkRecord, ResolveError>;
}
