use crate::Generator;
use snip_core::shortcode::DEFAULT_CODE_LENGTH;
use snip_core::{GeneratorError, ShortCode};
use std::sync::atomic::{AtomicU64, Ordering};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A deterministic short code generator using a sequential counter.
///
/// Produces codes like `"AAAAAAAA"`, `"AAAAAAAB"`, ... : the counter is
/// written in the base64url alphabet and left-padded to a fixed length.
/// An optional prefix is placed in front of the counter digits, so every
/// code still has exactly `code_length` characters.
///
/// Codes are guessable. Use [`RandomGenerator`](crate::RandomGenerator)
/// for anything that is exposed publicly.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
    digits: usize,
    /// `None` when the counter can never outgrow the digits.
    capacity: Option<u64>,
}

impl SeqGenerator {
    /// Creates a generator for codes of `code_length` characters.
    pub fn new(code_length: usize) -> Result<Self, GeneratorError> {
        Self::with_prefix("", code_length)
    }

    /// Creates a generator whose codes all start with `prefix`.
    ///
    /// The prefix must use the base64url alphabet and leave room for at
    /// least one counter digit.
    pub fn with_prefix(
        prefix: impl Into<String>,
        code_length: usize,
    ) -> Result<Self, GeneratorError> {
        Self::with_offset(prefix, code_length, 0)
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state.
    pub fn with_offset(
        prefix: impl Into<String>,
        code_length: usize,
        offset: u64,
    ) -> Result<Self, GeneratorError> {
        let prefix = prefix.into();

        if !prefix.chars().all(ShortCode::is_alphabet_char) {
            return Err(GeneratorError::InvalidSettings(format!(
                "prefix must contain only base64url characters: '{}'",
                prefix
            )));
        }
        if prefix.len() >= code_length {
            return Err(GeneratorError::InvalidSettings(format!(
                "prefix '{}' leaves no room for digits in a {} character code",
                prefix, code_length
            )));
        }

        let digits = code_length - prefix.len();
        let capacity = u32::try_from(digits)
            .ok()
            .and_then(|d| 64_u64.checked_pow(d));

        Ok(Self {
            counter: AtomicU64::new(offset),
            prefix,
            digits,
            capacity,
        })
    }

    fn encode(&self, mut value: u64) -> String {
        let mut digits = vec![ALPHABET[0]; self.digits];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(value % 64) as usize];
            value /= 64;
            if value == 0 {
                break;
            }
        }

        let mut code = String::with_capacity(self.prefix.len() + self.digits);
        code.push_str(&self.prefix);
        code.extend(digits.into_iter().map(char::from));
        code
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(0),
            prefix: String::new(),
            digits: DEFAULT_CODE_LENGTH,
            capacity: Some(64_u64.pow(DEFAULT_CODE_LENGTH as u32)),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Result<Self::Output, GeneratorError> {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        if let Some(capacity) = self.capacity {
            if count >= capacity {
                return Err(GeneratorError::Exhausted { issued: capacity });
            }
        }
        Ok(ShortCode::new_unchecked(self.encode(count)))
    }
}
