/*!
 * Tests for glossary CSV discovery and parsing
 */

use anyhow::Result;
use terminex::errors::GlossaryError;
use terminex::glossary::GlossaryStore;
use terminex::glossary_loader::{load_glossary_dir, load_glossary_file, parse_file_stem};

use crate::common::{sample_glossary_dir, write_glossary_file};

/// Test parsing of the <domain>_terms_<language> file stem convention
#[test]
fn test_parseFileStem_withValidStems_shouldExtractTags() {
    assert_eq!(
        parse_file_stem("agric_terms_twi"),
        Some(("twi".to_string(), "agric".to_string()))
    );
    assert_eq!(
        parse_file_stem("science_terms_twi"),
        Some(("twi".to_string(), "science".to_string()))
    );

    // Stems that do not follow the convention yield no tags
    assert_eq!(parse_file_stem("terms_twi"), None);
    assert_eq!(parse_file_stem("agric_terms"), None);
    assert_eq!(parse_file_stem("agric_glossary_twi"), None);
    assert_eq!(parse_file_stem(""), None);
}

/// Test loading a single well-formed glossary file
#[test]
fn test_loadGlossaryFile_withValidCsv_shouldReturnTaggedRecords() -> Result<()> {
    let dir = sample_glossary_dir()?;
    let path = dir.path().join("agric_terms_twi.csv");

    let (language, domain, records) = load_glossary_file(&path)?;

    assert_eq!(language, "twi");
    assert_eq!(domain, "agric");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].term, "abattoir");
    assert_eq!(records[0].translation, "aboa kum fie");
    Ok(())
}

/// Test that a row with a blank term fails the whole source
#[test]
fn test_loadGlossaryFile_withBlankTerm_shouldFailWithLoadError() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_glossary_file(
        &dir,
        "agric_terms_twi.csv",
        &[("1", "abattoir", "aboa kum fie"), ("2", "", "orphan translation")],
    )?;

    let result = load_glossary_file(&path);

    assert!(matches!(
        result,
        Err(GlossaryError::Load { source_name, .. }) if source_name == "agric_terms_twi.csv"
    ));
    Ok(())
}

/// Test that a misnamed file fails with a load error naming the source
#[test]
fn test_loadGlossaryFile_withUnconventionalName_shouldFailWithLoadError() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_glossary_file(&dir, "notes.csv", &[("1", "abattoir", "aboa kum fie")])?;

    let result = load_glossary_file(&path);

    assert!(matches!(
        result,
        Err(GlossaryError::Load { source_name, .. }) if source_name == "notes.csv"
    ));
    Ok(())
}

/// Test that a malformed source is skipped while the rest of the directory loads
#[test]
fn test_loadGlossaryDir_withOneMalformedSource_shouldSkipItAndLoadTheRest() -> Result<()> {
    let dir = sample_glossary_dir()?;
    std::fs::write(dir.path().join("broken_terms_twi.csv"), "id,term\n1,orphan\n")?;

    let feed = load_glossary_dir(dir.path());
    let store = GlossaryStore::from_records(feed)?;

    assert_eq!(
        store.available_domains(Some("twi"))?,
        vec!["agric".to_string(), "science".to_string()]
    );
    assert_eq!(store.get_glossary("twi", None)?.len(), 5);
    Ok(())
}

/// Test that sources are fed in sorted path order for deterministic tie-breaks
#[test]
fn test_loadGlossaryDir_withSeveralSources_shouldFeedInSortedOrder() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_glossary_file(&dir, "science_terms_twi.csv", &[("1", "atom", "atom_science")])?;
    write_glossary_file(&dir, "agric_terms_twi.csv", &[("2", "atom", "atom_agric")])?;

    let feed = load_glossary_dir(dir.path());
    let store = GlossaryStore::from_records(feed)?;

    // "agric_terms_twi.csv" sorts before "science_terms_twi.csv"
    assert_eq!(
        store.available_domains(Some("twi"))?,
        vec!["agric".to_string(), "science".to_string()]
    );
    Ok(())
}

/// Test that a directory with no usable sources yields an empty store error
#[test]
fn test_loadGlossaryDir_withNoUsableSources_shouldLeadToEmptyStore() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("readme.txt"), "not a glossary")?;
    std::fs::write(dir.path().join("junk.csv"), "id,term\n1,orphan\n")?;

    let feed = load_glossary_dir(dir.path());
    let result = GlossaryStore::from_records(feed);

    assert!(matches!(result, Err(GlossaryError::EmptyStore)));
    Ok(())
}

/// Test that a missing directory behaves like an empty one
#[test]
fn test_loadGlossaryDir_withMissingDirectory_shouldReturnEmptyFeed() {
    let feed = load_glossary_dir("/nonexistent/terminex-glossaries");

    assert!(feed.is_empty());
}
