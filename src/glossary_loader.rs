use std::path::{Path, PathBuf};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::errors::GlossaryError;
use crate::glossary::TermRecord;

// @module: Glossary CSV discovery and parsing

// @const: File stem convention regex, e.g. "agric_terms_twi"
static FILE_STEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<domain>[A-Za-z0-9-]+)_terms_(?P<language>[A-Za-z0-9-]+)$").unwrap()
});

/// Raw CSV row with the expected `id`, `term`, `translation` headers
#[derive(Debug, Deserialize)]
struct GlossaryRow {
    #[serde(default)]
    id: String,

    #[serde(default)]
    term: String,

    #[serde(default)]
    translation: String,
}

/// Parse a glossary file stem of the form `<domain>_terms_<language>`
///
/// Returns (language, domain), or None when the stem does not follow the
/// naming convention.
pub fn parse_file_stem(stem: &str) -> Option<(String, String)> {
    FILE_STEM_REGEX.captures(stem).map(|captures| {
        (
            captures["language"].to_string(),
            captures["domain"].to_string(),
        )
    })
}

/// Load a single glossary CSV file.
///
/// The language and domain tags are derived from the file name. Any
/// malformed content - an unparseable row, or a row with a blank `term` or
/// `translation` - fails the whole source with `GlossaryError::Load`.
pub fn load_glossary_file<P: AsRef<Path>>(
    path: P,
) -> Result<(String, String, Vec<TermRecord>), GlossaryError> {
    let path = path.as_ref();
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    let (language, domain) = parse_file_stem(&stem).ok_or_else(|| GlossaryError::Load {
        source_name: source_name.clone(),
        reason: "file name does not follow the <domain>_terms_<language> convention".to_string(),
    })?;

    let mut reader = csv::Reader::from_path(path).map_err(|e| GlossaryError::Load {
        source_name: source_name.clone(),
        reason: e.to_string(),
    })?;

    let mut records = Vec::new();
    for (row_index, row) in reader.deserialize::<GlossaryRow>().enumerate() {
        let row = row.map_err(|e| GlossaryError::Load {
            source_name: source_name.clone(),
            reason: format!("row {}: {}", row_index + 1, e),
        })?;

        if row.term.trim().is_empty() || row.translation.trim().is_empty() {
            return Err(GlossaryError::Load {
                source_name: source_name.clone(),
                reason: format!("row {}: missing term or translation", row_index + 1),
            });
        }

        records.push(TermRecord::new(
            row.id,
            row.term.trim().to_string(),
            row.translation,
        ));
    }

    debug!(
        "Loaded {} record(s) from '{}' ({}/{})",
        records.len(),
        source_name,
        language,
        domain
    );

    Ok((language, domain, records))
}

/// Discover and load every glossary CSV under a directory.
///
/// Sources that fail to load are skipped with a warning; the caller decides
/// whether an empty feed is fatal (the store treats it as `EmptyStore`).
/// Files are visited in sorted path order so that domain-load order, and
/// with it union concatenation and tie-breaks, is deterministic.
pub fn load_glossary_dir<P: AsRef<Path>>(dir: P) -> Vec<(String, String, TermRecord)> {
    let mut csv_files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("csv"))
        {
            csv_files.push(path.to_path_buf());
        }
    }

    csv_files.sort();

    let mut feed = Vec::new();
    for path in csv_files {
        match load_glossary_file(&path) {
            Ok((language, domain, records)) => {
                for record in records {
                    feed.push((language.clone(), domain.clone(), record));
                }
            }
            Err(e) => {
                warn!("{}", e);
            }
        }
    }

    feed
}
