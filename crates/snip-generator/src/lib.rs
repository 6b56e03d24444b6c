pub mod random;
pub mod seq;

pub use random::{EntropySource, OsEntropy, RandomGenerator, RandomGeneratorSettings};
pub use seq::SeqGenerator;
pub use snip_core::GeneratorError;

use snip_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is enforced by the store; a generator only needs to make
/// collisions unlikely.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates a candidate short code.
    ///
    /// Errors are fatal for the current request. Implementations must not
    /// fall back to a weaker, predictable encoding.
    fn generate(&self) -> Result<Self::Output, GeneratorError>;
}

impl<G: Generator + ?Sized> Generator for std::sync::Arc<G> {
    type Output = G::Output;

    fn generate(&self) -> Result<Self::Output, GeneratorError> {
        (**self).generate()
    }
}
