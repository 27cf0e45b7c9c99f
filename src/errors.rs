/*!
 * Error types for the terminex application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading or querying glossaries
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// Error when a single glossary source fails to parse.
    /// Recoverable during directory loads: the source is skipped with a warning.
    #[error("Failed to load glossary source '{source_name}': {reason}")]
    Load {
        /// Name of the offending source (file name or feed label)
        source_name: String,
        /// Human-readable parse failure description
        reason: String,
    },

    /// Error when no usable glossary sources could be loaded at all.
    /// Fatal at store construction.
    #[error("No usable glossary sources were loaded")]
    EmptyStore,

    /// Error when a query names a language that is not in the store
    #[error("Unknown language: '{0}'")]
    UnknownLanguage(String),

    /// Error when a query names a domain that is not loaded for the language
    #[error("Unknown domain '{domain}' for language '{language}'")]
    UnknownDomain {
        /// Language the query was scoped to
        language: String,
        /// Domain that could not be found
        domain: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from glossary loading or querying
    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
