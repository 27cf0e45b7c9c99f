/*!
 * Common test utilities shared across the terminex test suite
 */

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a glossary CSV file with the standard id,term,translation header
/// into a temporary directory, returning the created path.
pub fn write_glossary_file(
    dir: &TempDir,
    file_name: &str,
    rows: &[(&str, &str, &str)],
) -> Result<PathBuf> {
    let path = dir.path().join(file_name);
    let mut content = String::from("id,term,translation\n");
    for (id, term, translation) in rows {
        content.push_str(&format!("{},{},{}\n", id, term, translation));
    }
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Build a temporary glossary directory with the agric and science Twi
/// glossaries used throughout the suite.
pub fn sample_glossary_dir() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;

    write_glossary_file(
        &dir,
        "agric_terms_twi.csv",
        &[
            ("1", "abattoir", "aboa kum fie"),
            ("2", "acaricide", "nkramamoadi kum aduro"),
            ("3", "acreage", "asase dodoɔ"),
        ],
    )?;

    write_glossary_file(
        &dir,
        "science_terms_twi.csv",
        &[("10", "molecule", "molecule_twi"), ("11", "atom", "atom_twi")],
    )?;

    Ok(dir)
}
