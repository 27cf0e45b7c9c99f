/*!
 * # Terminex - glossary-controlled term translation
 *
 * A Rust library for locating domain-specific technical terms in free-form
 * text and substituting each occurrence with a curated translation drawn
 * from CSV glossaries.
 *
 * ## Features
 *
 * - Load tabular term lists (`<domain>_terms_<language>.csv`) into a
 *   read-only, queryable store
 * - Case-insensitive, word-boundary aware term matching
 * - Longest-match-first resolution for overlapping terms
 * - Deterministic substitution that leaves non-matched text untouched
 * - Single-text and batch translation with per-occurrence match metadata
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `glossary`: Term storage and matching:
 *   - `glossary::store`: Read-only index of terms by language and domain
 *   - `glossary::matcher`: Occurrence scanning and substitution
 * - `glossary_loader`: CSV discovery and parsing for glossary directories
 * - `translator`: Main `Terminex` translation entry point
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod glossary;
pub mod glossary_loader;
pub mod translator;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, GlossaryError};
pub use glossary::{Glossary, GlossaryStore, TermOccurrence, TermRecord};
pub use translator::{Terminex, TranslationResult};
