//! String extraction binary - harvests Turkish UI phrases and renders a seed SQL file
//!
//! Usage:
//!   cargo run --bin extract-strings                     # Scan ./src, write translations_seed.sql
//!   cargo run --bin extract-strings -- web/src          # Scan a different source tree
//!   cargo run --bin extract-strings -- --out seed.sql   # Custom output path
//!   cargo run --bin extract-strings -- --dry-run        # Print the SQL instead of writing it
//!
//! Optional environment variables:
//! - SOURCE_LANG (defaults to tr)

use anyhow::{Context, Result};
use content_translation_sync::keys;
use content_translation_sync::lang::LangCode;
use content_translation_sync::migration;
use content_translation_sync::{extract, scan};
use std::fs;
use std::path::Path;
use tracing::info;

const DEFAULT_SOURCE_DIR: &str = "src";
const DEFAULT_OUTPUT_FILE: &str = "translations_seed.sql";

fn print_usage() {
    println!("Usage: extract-strings [SOURCE_DIR] [--out FILE] [--dry-run]");
    println!();
    println!("  SOURCE_DIR   directory tree to scan (default: {})", DEFAULT_SOURCE_DIR);
    println!("  --out FILE   where to write the seed SQL (default: {})", DEFAULT_OUTPUT_FILE);
    println!("  --dry-run    print the SQL to stdout instead of writing a file");
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_translation_sync=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut source_dir = DEFAULT_SOURCE_DIR.to_string();
    let mut output_file = DEFAULT_OUTPUT_FILE.to_string();
    let mut dry_run = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                output_file = args
                    .get(i)
                    .cloned()
                    .context("--out requires a file path")?;
            }
            "--dry-run" => dry_run = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if !other.starts_with('-') => source_dir = other.to_string(),
            other => anyhow::bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let source_lang = LangCode::parse(
        &std::env::var("SOURCE_LANG").unwrap_or_else(|_| "tr".to_string()),
    )
    .context("SOURCE_LANG is not a valid language code")?;

    info!("Scanning {} for translatable strings...", source_dir);
    let extracted = scan::scan_source_tree(Path::new(&source_dir))?;
    let total_extracted = extracted.len();

    let unique = extract::dedupe(extracted);

    if unique.is_empty() {
        println!("\n========== NO TRANSLATABLE STRINGS FOUND ==========");
        println!("Scanned: {}", source_dir);
        println!("Nothing matched the extraction patterns.");
        println!("===================================================\n");
        return Ok(());
    }

    let sql = migration::render_seed_sql(&unique, &source_lang);

    if dry_run {
        println!("{}", sql);
        return Ok(());
    }

    fs::write(&output_file, &sql)
        .with_context(|| format!("Failed to write seed file to {}", output_file))?;

    // Print the summary
    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                   STRING EXTRACTION SUMMARY                       ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!(
        "║ Strings extracted: {:>5}                                          ║",
        total_extracted
    );
    println!(
        "║ Unique strings:    {:>5}                                          ║",
        unique.len()
    );
    println!(
        "║ Seed language:     {:>5}                                          ║",
        source_lang.code()
    );
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("--- Sample entries ---");
    for entry in unique.iter().take(5) {
        let preview: String = entry.text.chars().take(40).collect();
        println!(
            "  {} <- \"{}\" ({})",
            keys::content_key(&entry.text, &entry.source_file),
            preview,
            entry.source_file
        );
    }
    println!();
    println!("💾 Saved to: {}", output_file);
    println!();

    Ok(())
}
