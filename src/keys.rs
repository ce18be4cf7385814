//! Content key and content hash derivation.
//!
//! Both the extraction tool and the sync service derive identity from the two
//! functions here, so their output must stay stable across releases: a changed
//! key orphans every stored translation for that phrase, and a changed hash
//! makes staleness comparisons meaningless.

use std::path::Path;

/// Lower-case Turkish letters kept (together with `a-z`, `0-9`, and
/// whitespace) when normalizing text into key tokens.
const KEY_ALPHABET_EXTRA: &str = "çğıöşü";

/// Maximum length of a content key, in characters.
const MAX_KEY_CHARS: usize = 50;

/// Derive the stable identifier for a phrase.
///
/// The key is `{namespace}.{tokens}` where the namespace is the lower-cased
/// file base name (extension stripped) and the tokens are the first three
/// normalized words of the text joined with `_`, the whole truncated to 50
/// characters.
///
/// Distinct phrases from the same file that share their first three
/// normalized words collide. That is a known limitation of this scheme and
/// is left unresolved; collisions surface as conflict-skips in the seed
/// output and overwrites in the sync path.
pub fn content_key(text: &str, source_file: &str) -> String {
    let namespace = Path::new(source_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c.is_whitespace()
                || KEY_ALPHABET_EXTRA.contains(*c)
        })
        .collect();

    let tokens: Vec<&str> = normalized.split_whitespace().take(3).collect();
    let key = format!("{}.{}", namespace, tokens.join("_"));
    key.chars().take(MAX_KEY_CHARS).collect()
}

/// Deterministic, order-sensitive digest of a phrase.
///
/// Folds each character's code point into a signed 32-bit accumulator via
/// `hash = hash*31 - hash + code`, wrapping on overflow, and renders the
/// absolute value in lower-case base-36. Determinism is the contract here,
/// not collision resistance.
pub fn content_hash(text: &str) -> String {
    let mut hash: i32 = 0;
    for c in text.chars() {
        hash = hash
            .wrapping_mul(31)
            .wrapping_sub(hash)
            .wrapping_add(c as i32);
    }
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.iter().rev().map(|&b| b as char).collect()
}
