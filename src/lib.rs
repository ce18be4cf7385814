//! Content translation tooling for a Turkish marketing site.
//!
//! Two halves share this crate: offline extraction tooling (`scan`,
//! `extract`, `keys`, `migration`) that harvests Turkish phrases from UI
//! sources and renders a seed SQL file, and a small HTTP service
//! (`server`, `sync`, `deepl`, `db`) that translates stored phrases via
//! the DeepL API and upserts the results into PostgreSQL.

pub mod config;
pub mod db;
pub mod deepl;
pub mod error;
pub mod extract;
pub mod keys;
pub mod lang;
pub mod migration;
pub mod scan;
pub mod security;
pub mod server;
pub mod sync;
