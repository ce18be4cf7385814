//! Seed SQL emission.
//!
//! Renders deduplicated extracted phrases into one idempotent bulk insert.
//! Conflict policy is DO NOTHING on `(content_key, language)`: re-running the
//! extraction never duplicates rows and never clobbers rows an administrator
//! has edited by hand.

use crate::extract::ExtractedString;
use crate::keys::{content_hash, content_key};
use crate::lang::LangCode;

/// Render the seed script for a set of deduplicated entries.
///
/// One value tuple per entry, `(content_key, language, translated_text,
/// content_hash)`, preceded by a count header for audit. Single quotes in
/// the text are doubled for SQL literal syntax. An empty input produces a
/// header-only script with no INSERT.
pub fn render_seed_sql(entries: &[ExtractedString], source_lang: &LangCode) -> String {
    let mut sql = format!("-- {} unique strings extracted from source\n", entries.len());

    if entries.is_empty() {
        sql.push_str("-- nothing to insert\n");
        return sql;
    }

    sql.push_str(
        "INSERT INTO content_translations (content_key, language, translated_text, content_hash) VALUES\n",
    );
    let rows: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "  ('{}', '{}', '{}', '{}')",
                escape_sql_literal(&content_key(&entry.text, &entry.source_file)),
                source_lang.code(),
                escape_sql_literal(&entry.text),
                content_hash(&entry.text)
            )
        })
        .collect();
    sql.push_str(&rows.join(",\n"));
    sql.push_str("\nON CONFLICT (content_key, language) DO NOTHING;\n");
    sql
}

fn escape_sql_literal(text: &str) -> String {
    text.replace('\'', "''")
}
