//! Turkish string extraction from UI source text.
//!
//! Three independent regex passes pull candidate phrases out of a file's
//! text, then a filter drops anything that does not look like human-readable
//! Turkish copy. This is best-effort heuristic tooling for an offline,
//! human-reviewed job, not a parser.
//!
//! Known inaccuracies, accepted rather than hardened against:
//! - mixed quote delimiters (`"...'`) capture across the mismatch, and an
//!   apostrophe inside a double-quoted literal splits the phrase;
//! - markup text nodes containing `{...}` expressions are skipped entirely;
//! - legitimate phrases containing a slash are dropped by the path filter;
//! - the same phrase can be yielded by more than one pass (the deduplicator
//!   collapses these later).

use regex::Regex;
use std::collections::HashSet;

/// Characters that mark a phrase as Turkish. A candidate without at least one
/// of these is treated as an identifier or English copy and dropped.
pub const TURKISH_CHARS: &str = "çÇğĞıİöÖşŞüÜ";

/// Substrings that mark a candidate as a path, URL, or code fragment.
const REJECT_SUBSTRINGS: [&str; 4] = ["/", "http", "import", "const"];

/// A phrase pulled from a source file.
///
/// Identity is the `text` alone; `source_file` is provenance for review and
/// key derivation, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub text: String,
    pub source_file: String,
}

/// The three extraction passes, applied independently per file.
pub fn extraction_patterns() -> Vec<Regex> {
    vec![
        // Pass (a): text nodes between markup tags
        Regex::new(r">([^<>{}]+)<").unwrap(),
        // Pass (b): quoted string literals
        Regex::new(r#"["']([^"']+)["']"#).unwrap(),
        // Pass (c): backtick/template text
        Regex::new(r"`([^`]+)`").unwrap(),
    ]
}

/// Extract every Turkish phrase from one file's text.
///
/// Pure over the text; `source_file` is attached to each result as
/// provenance. Each pass scans left-to-right and yields its non-overlapping
/// matches, so the same phrase may appear once per pass.
pub fn extract_strings(text: &str, source_file: &str) -> Vec<ExtractedString> {
    let mut found = Vec::new();
    for pattern in extraction_patterns() {
        for caps in pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let candidate = m.as_str().trim();
                if is_translatable(candidate) {
                    found.push(ExtractedString {
                        text: candidate.to_string(),
                        source_file: source_file.to_string(),
                    });
                }
            }
        }
    }
    found
}

/// Candidate filter: strictly more than 3 characters, at least one Turkish
/// special character, none of the reject substrings.
fn is_translatable(candidate: &str) -> bool {
    if candidate.chars().count() <= 3 {
        return false;
    }
    if !candidate.chars().any(|c| TURKISH_CHARS.contains(c)) {
        return false;
    }
    !REJECT_SUBSTRINGS
        .iter()
        .any(|reject| candidate.contains(reject))
}

/// Collapse extracted phrases to one entry per unique text.
///
/// The first occurrence wins, keeping its provenance, and first-appearance
/// order is preserved so repeated runs produce identical, reviewable output.
pub fn dedupe(entries: Vec<ExtractedString>) -> Vec<ExtractedString> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for entry in entries {
        if seen.insert(entry.text.clone()) {
            unique.push(entry);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[ExtractedString]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    // ==================== Pattern Tests ====================

    #[test]
    fn test_patterns_compile() {
        let patterns = extraction_patterns();
        assert_eq!(patterns.len(), 3);
    }

    #[test]
    fn test_tag_text_pattern() {
        let patterns = extraction_patterns();
        assert!(patterns[0].is_match("<h1>Merhaba</h1>"));
        assert!(!patterns[0].is_match("<h1>{baslik}</h1>"));
    }

    #[test]
    fn test_quoted_literal_pattern() {
        let patterns = extraction_patterns();
        assert!(patterns[1].is_match(r#"title="Hizmetler""#));
        assert!(patterns[1].is_match("label: 'Hizmetler'"));
    }

    #[test]
    fn test_template_literal_pattern() {
        let patterns = extraction_patterns();
        assert!(patterns[2].is_match("`Hoş geldiniz`"));
    }

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extracts_tag_text() {
        let found = extract_strings("<h1>Merhaba Dünya</h1>", "Hero.tsx");
        assert_eq!(texts(&found), vec!["Merhaba Dünya"]);
        assert_eq!(found[0].source_file, "Hero.tsx");
    }

    #[test]
    fn test_extracts_quoted_literal() {
        let found = extract_strings(r#"const baslik = "Başlık Metni";"#, "Hero.tsx");
        // The reject list applies to the candidate, not the surrounding line
        assert_eq!(texts(&found), vec!["Başlık Metni"]);
    }

    #[test]
    fn test_extracts_template_text() {
        let found = extract_strings("const mesaj = `Projeyi görüntüle`;", "Card.tsx");
        assert_eq!(texts(&found), vec!["Projeyi görüntüle"]);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let found = extract_strings("<p>  Merhaba Dünya  </p>", "Hero.tsx");
        assert_eq!(texts(&found), vec!["Merhaba Dünya"]);
    }

    #[test]
    fn test_same_text_found_by_two_passes() {
        let source = r#"<a title="Hizmetlerimiz çözümleri">Hizmetlerimiz çözümleri</a>"#;
        let found = extract_strings(source, "Nav.tsx");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, found[1].text);
    }

    #[test]
    fn test_multiple_matches_in_one_pass() {
        let source = "<li>Web tasarımı</li><li>Grafik tasarımı</li>";
        let found = extract_strings(source, "Services.tsx");
        assert_eq!(texts(&found), vec!["Web tasarımı", "Grafik tasarımı"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_strings("", "Hero.tsx").is_empty());
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_rejects_text_without_turkish_chars() {
        let found = extract_strings("<p>Hello World</p>", "Hero.tsx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_length_boundary_is_strict() {
        // 4 qualifying characters pass, 3 do not
        let found = extract_strings("<p>şşşş</p><p>şşş</p>", "Hero.tsx");
        assert_eq!(texts(&found), vec!["şşşş"]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "şşş" is 6 bytes but 3 characters and must be rejected
        let found = extract_strings("<span>şşş</span>", "Hero.tsx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_rejects_paths() {
        let found = extract_strings(r#"<p>Ürünler/hizmetler</p>"#, "Nav.tsx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_rejects_urls() {
        let found = extract_strings(r#"href="https://örnek.com.tr""#, "Footer.tsx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_rejects_code_tokens() {
        let found = extract_strings("<p>import İşlemleri</p><p>const değişken</p>", "X.tsx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_skips_nodes_with_expressions() {
        // A `{...}` inside a text node makes the whole node unmatched
        let found = extract_strings("<p>Başlık {deger} metni</p>", "Hero.tsx");
        assert!(found.is_empty());
    }

    #[test]
    fn test_apostrophe_splits_quoted_literal() {
        // Known false-positive class: the apostrophe ends the match early
        let found = extract_strings(r#"alt="Türkiye'nin lideri""#, "About.tsx");
        assert_eq!(texts(&found), vec!["Türkiye"]);
    }

    #[test]
    fn test_apostrophe_inside_tag_text_survives() {
        let found = extract_strings("<h2>Türkiye'nin lider ajansı</h2>", "About.tsx");
        assert_eq!(texts(&found), vec!["Türkiye'nin lider ajansı"]);
    }

    // ==================== Dedupe Tests ====================

    #[test]
    fn test_dedupe_collapses_same_text() {
        let entries = vec![
            ExtractedString {
                text: "Merhaba Dünya".to_string(),
                source_file: "a".to_string(),
            },
            ExtractedString {
                text: "Merhaba Dünya".to_string(),
                source_file: "b".to_string(),
            },
        ];
        let unique = dedupe(entries);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].source_file, "a");
    }

    #[test]
    fn test_dedupe_preserves_first_appearance_order() {
        let entries = vec![
            ExtractedString {
                text: "Birinci başlık".to_string(),
                source_file: "a".to_string(),
            },
            ExtractedString {
                text: "İkinci başlık".to_string(),
                source_file: "b".to_string(),
            },
            ExtractedString {
                text: "Birinci başlık".to_string(),
                source_file: "c".to_string(),
            },
            ExtractedString {
                text: "Üçüncü başlık".to_string(),
                source_file: "a".to_string(),
            },
        ];
        let unique = dedupe(entries);
        assert_eq!(
            texts(&unique),
            vec!["Birinci başlık", "İkinci başlık", "Üçüncü başlık"]
        );
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn test_dedupe_distinct_texts_untouched() {
        let entries = vec![
            ExtractedString {
                text: "Hizmetlerimiz".to_string(),
                source_file: "a".to_string(),
            },
            ExtractedString {
                text: "Projelerimiz".to_string(),
                source_file: "a".to_string(),
            },
        ];
        assert_eq!(dedupe(entries).len(), 2);
    }
}
