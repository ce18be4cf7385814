//! Validated language codes.
//!
//! Language codes cross the HTTP boundary as free-form strings. This module
//! narrows them to two-letter ISO 639-1 codes before anything downstream
//! (the translation API, the store) sees them.

use anyhow::{bail, Result};
use std::fmt;

/// A validated 2-letter language code.
///
/// Held lower-case internally (`"tr"`, `"en"`); the external translation API
/// receives the upper-cased form via [`LangCode::api_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangCode {
    code: String,
}

impl LangCode {
    /// Create a LangCode from a caller-supplied string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "tr", "en", "EN")
    ///
    /// # Returns
    /// * `Ok(LangCode)` if the trimmed code is exactly two ASCII letters
    /// * `Err` otherwise
    pub fn parse(code: &str) -> Result<LangCode> {
        let trimmed = code.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("Invalid language code '{}' (expected two letters)", code);
        }
        Ok(LangCode {
            code: trimmed.to_ascii_lowercase(),
        })
    }

    /// The lower-case code, as stored and as returned to HTTP callers.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The upper-case wire form the translation API expects.
    pub fn api_code(&self) -> String {
        self.code.to_ascii_uppercase()
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
