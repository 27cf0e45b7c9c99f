/*!
 * Glossary storage and term matching.
 *
 * This module contains the core functionality for indexing glossary terms
 * and locating them in text. It is split into two submodules:
 *
 * - `store`: Read-only index of term records by language and domain
 * - `matcher`: Occurrence scanning and substitution over a resolved glossary
 */

// Re-export main types for easier usage
pub use self::matcher::TermOccurrence;
pub use self::store::{Glossary, GlossaryStore, TermRecord};

// Submodules
pub mod matcher;
pub mod store;
