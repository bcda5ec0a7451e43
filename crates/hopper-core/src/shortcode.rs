use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// The 62 symbols a short code is drawn from: `A-Z`, `a-z` and `0-9`.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A validated short code identifying a stored link.
///
/// Short codes are exactly [`CODE_LENGTH`] characters long and contain only
/// ASCII letters and digits. Comparison is case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
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

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() != CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only ASCII letters and digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for ShortCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("abc123").is_ok());
        assert!(ShortCode::new("ZZZZZZ").is_ok());
        assert!(ShortCode::new("0aB9zY").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("abc12").is_err());
        assert!(ShortCode::new("abc1234").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc-12").is_err());
        assert!(ShortCode::new("abc_12").is_err());
        assert!(ShortCode::new("abc 12").is_err());
        // six bytes, but not ASCII
        assert!(ShortCode::new("abcé1").is_err());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let lower = ShortCode::new("abcdef").unwrap();
        let upper = ShortCode::new("ABCDEF").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn alphabet_has_62_distinct_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 62);
        assert!(symbols.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(code.to_url("https://hop.per"), "https://hop.per/abc123");
        assert_eq!(code.to_url("https://hop.per/"), "https://hop.per/abc123");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let code: ShortCode = serde_json::from_str("\"Xy12Ab\"").unwrap();
        assert_eq!(code.as_str(), "Xy12Ab");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"Xy12Ab\"");

        assert!(serde_json::from_str::<ShortCode>("\"bad\"").is_err());
    }
}
