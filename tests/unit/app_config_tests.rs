/*!
 * Tests for application configuration handling
 */

use anyhow::Result;
use terminex::app_config::{Config, LogLevel};

/// Test the default configuration values
#[test]
fn test_default_withNoOverrides_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.glossary_dir, "glossaries");
    assert_eq!(config.target_language, None);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that loading a missing config file creates a default one
#[test]
fn test_fromFile_withMissingFile_shouldCreateDefaultConfig() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conf.json");

    let config = Config::from_file(&path)?;

    assert_eq!(config, Config::default());
    assert!(path.exists());
    Ok(())
}

/// Test round-tripping a configuration through a file
#[test]
fn test_fromFile_withSavedConfig_shouldRoundTrip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conf.json");

    let config = Config {
        glossary_dir: "data/glossaries".to_string(),
        target_language: Some("twi".to_string()),
        log_level: LogLevel::Debug,
    };
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

/// Test that partial config files fall back to defaults for omitted fields
#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "target_language": "twi" }"#)?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.glossary_dir, "glossaries");
    assert_eq!(config.target_language, Some("twi".to_string()));
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that malformed JSON is rejected
#[test]
fn test_fromFile_withMalformedJson_shouldFail() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}

/// Test mapping of configured levels onto log crate filters
#[test]
fn test_toLevelFilter_withEachLevel_shouldMapDirectly() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
