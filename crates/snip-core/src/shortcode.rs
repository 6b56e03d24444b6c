use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Default number of characters in a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// A short code identifying a stored long URL.
///
/// Short codes are drawn from the URL-safe base64 alphabet
/// (`A-Z`, `a-z`, `0-9`, `-` and `_`), so they can be placed into a URL
/// path without escaping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    ///
    /// Valid codes are non-empty and contain only `[A-Za-z0-9_-]`.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that encode with the base64url alphabet).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `c` belongs to the URL-safe base64 alphabet.
    pub fn is_alphabet_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    fn validate(code: &str) -> Result<()> {
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "short code cannot be empty".to_string(),
            ));
        }

        if !code.chars().all(Self::is_alphabet_char) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only base64url characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShortCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

/// The fixed shape of every code held by one store instance.
///
/// Only the length varies between stores; the alphabet is always base64url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFormat {
    length: usize,
}

impl CodeFormat {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(CoreError::InvalidShortCode(
                "code length must be at least 1".to_string(),
            ));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Checks that `code` has exactly the configured length.
    pub fn validate(&self, code: &ShortCode) -> Result<()> {
        if code.len() != self.length {
            return Err(CoreError::InvalidShortCode(format!(
                "expected {} characters, got {} in '{}'",
                self.length,
                code.len(),
                code
            )));
        }
        Ok(())
    }
}

impl Default for CodeFormat {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("Ab3dEf12").is_ok());
        assert!(ShortCode::new("a-b_c").is_ok());
        assert!(ShortCode::new("z").is_ok());
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc def").is_err());
        assert!(ShortCode::new("abc/def").is_err());
        assert!(ShortCode::new("abc+def").is_err());
        assert!(ShortCode::new("abc=").is_err());
    }

    #[test]
    fn display() {
        let code = ShortCode::new("Ab3dEf12").unwrap();
        assert_eq!(code.to_string(), "Ab3dEf12");
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("Ab3dEf12").unwrap();
        assert_eq!(
            code.to_url("http://localhost:8080"),
            "http://localhost:8080/Ab3dEf12"
        );
        assert_eq!(
            code.to_url("http://localhost:8080/"),
            "http://localhost:8080/Ab3dEf12"
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok: std::result::Result<ShortCode, _> = serde_json::from_str("\"Ab3dEf12\"");
        assert_eq!(ok.unwrap().as_str(), "Ab3dEf12");

        let bad: std::result::Result<ShortCode, _> = serde_json::from_str("\"not valid\"");
        assert!(bad.is_err());
    }

    #[test]
    fn format_checks_length() {
        let format = CodeFormat::default();
        assert_eq!(format.length(), DEFAULT_CODE_LENGTH);
        assert!(format.validate(&ShortCode::new_unchecked("Ab3dEf12")).is_ok());
        assert!(format.validate(&ShortCode::new_unchecked("short")).is_err());
        assert!(format.validate(&ShortCode::new_unchecked("much-too-long")).is_err());
    }

    #[test]
    fn zero_length_format_is_rejected() {
        assert!(CodeFormat::new(0).is_err());
        assert_eq!(CodeFormat::new(12).unwrap().length(), 12);
    }
}
