use crate::Generator;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use snip_core::shortcode::DEFAULT_CODE_LENGTH;
use snip_core::{GeneratorError, ShortCode};
use typed_builder::TypedBuilder;

/// A source of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync + 'static {
    /// Fills `buf` entirely with random bytes or fails.
    fn fill(&self, buf: &mut [u8]) -> Result<(), GeneratorError>;
}

/// Entropy from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        getrandom::fill(buf).map_err(|e| GeneratorError::EntropyUnavailable(e.to_string()))
    }
}

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomGeneratorSettings {
    /// Number of characters in every generated code.
    #[builder(default = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,
}

impl Default for RandomGeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Generates fixed-length random codes in the base64url alphabet.
///
/// Draws `code_length` random bytes, encodes them as unpadded URL-safe base64
/// and keeps the first `code_length` characters. With the default length of
/// 8 that is 48 bits of entropy per code.
#[derive(Debug, Clone)]
pub struct RandomGenerator<E = OsEntropy> {
    code_length: usize,
    entropy: E,
}

impl RandomGenerator<OsEntropy> {
    /// Creates a generator backed by the operating system's CSPRNG.
    pub fn new(settings: RandomGeneratorSettings) -> Result<Self, GeneratorError> {
        Self::with_entropy(settings, OsEntropy)
    }
}

impl<E: EntropySource> RandomGenerator<E> {
    /// Creates a generator that draws from a custom entropy source.
    pub fn with_entropy(
        settings: RandomGeneratorSettings,
        entropy: E,
    ) -> Result<Self, GeneratorError> {
        if settings.code_length == 0 {
            return Err(GeneratorError::InvalidSettings(
                "code length must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            code_length: settings.code_length,
            entropy,
        })
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }
}

impl<E: EntropySource> Generator for RandomGenerator<E> {
    type Output = ShortCode;

    fn generate(&self) -> Result<Self::Output, GeneratorError> {
        let mut bytes = vec![0u8; self.code_length];
        self.entropy.fill(&mut bytes)?;

        // n bytes always encode to at least n base64 characters
        let mut encoded = URL_SAFE_NO_PAD.encode(&bytes);
        encoded.truncate(self.code_length);

        Ok(ShortCode::new_unchecked(encoded))
    }
}
