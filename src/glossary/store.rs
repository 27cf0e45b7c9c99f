use std::collections::HashMap;

use log::{debug, warn};

use crate::errors::GlossaryError;
use crate::glossary::matcher;

// @module: Glossary term storage and lookup

/// Single glossary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    /// Opaque identifier, unique within its (language, domain) partition
    pub id: String,

    /// Source-language surface form, case as authored
    pub term: String,

    /// Target-language equivalent, substituted verbatim
    pub translation: String,
}

impl TermRecord {
    /// Creates a new term record - used by tests and external loaders
    pub fn new(id: impl Into<String>, term: impl Into<String>, translation: impl Into<String>) -> Self {
        TermRecord {
            id: id.into(),
            term: term.into(),
            translation: translation.into(),
        }
    }

    /// Whether the record carries a non-blank term and translation
    pub fn is_usable(&self) -> bool {
        !self.term.trim().is_empty() && !self.translation.trim().is_empty()
    }
}

/// Ordered collection of term records for one (language, domain) pair
///
/// Insertion order is preserved because it governs matching tie-breaks
/// for equal-length terms.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    records: Vec<TermRecord>,
}

impl Glossary {
    /// Records in load order
    pub fn records(&self) -> &[TermRecord] {
        &self.records
    }

    /// Number of records in the glossary
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the glossary holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read-only index of glossary terms by language and domain.
///
/// Built once from an ordered feed of records and immutable afterwards,
/// so it is safe to share across any number of concurrent readers.
/// Key vectors record insertion order beside the maps: union queries and
/// tie-breaks must never depend on hash-iteration order.
#[derive(Debug, Default)]
pub struct GlossaryStore {
    /// Languages in load order
    languages: Vec<String>,

    /// All domains in first-seen order across the whole feed
    domains: Vec<String>,

    /// Per-language domain load order
    domains_by_language: HashMap<String, Vec<String>>,

    /// Glossary per (language, domain) pair
    glossaries: HashMap<(String, String), Glossary>,
}

impl GlossaryStore {
    /// Build a store from an ordered feed of (language, domain, record) tuples.
    ///
    /// Records with a blank term or translation are skipped with a warning.
    /// Empty glossaries are never stored: a (language, domain) partition only
    /// exists once it has received at least one usable record.
    ///
    /// Returns `GlossaryError::EmptyStore` when the feed yields nothing usable.
    pub fn from_records<I>(feed: I) -> Result<Self, GlossaryError>
    where
        I: IntoIterator<Item = (String, String, TermRecord)>,
    {
        let mut store = GlossaryStore::default();

        for (language, domain, record) in feed {
            if !record.is_usable() {
                warn!(
                    "Skipping unusable record '{}' in {}/{}: blank term or translation",
                    record.id, language, domain
                );
                continue;
            }

            if !store.languages.contains(&language) {
                store.languages.push(language.clone());
            }
            if !store.domains.contains(&domain) {
                store.domains.push(domain.clone());
            }

            let language_domains = store
                .domains_by_language
                .entry(language.clone())
                .or_default();
            if !language_domains.contains(&domain) {
                language_domains.push(domain.clone());
            }

            store
                .glossaries
                .entry((language, domain))
                .or_default()
                .records
                .push(record);
        }

        if store.glossaries.is_empty() {
            return Err(GlossaryError::EmptyStore);
        }

        debug!(
            "Glossary store built: {} language(s), {} partition(s)",
            store.languages.len(),
            store.glossaries.len()
        );

        Ok(store)
    }

    /// Every language with at least one domain loaded, in load order
    pub fn available_languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    /// Available domains, in load order.
    ///
    /// All domains when `language` is omitted; only the domains loaded for
    /// that language otherwise. Naming an absent language is an error, never
    /// an empty result.
    pub fn available_domains(&self, language: Option<&str>) -> Result<Vec<String>, GlossaryError> {
        match language {
            None => Ok(self.domains.clone()),
            Some(language) => self
                .domains_by_language
                .get(language)
                .cloned()
                .ok_or_else(|| GlossaryError::UnknownLanguage(language.to_string())),
        }
    }

    /// Resolve the glossary for a language, in load order.
    ///
    /// With a domain, returns that partition's records. Without one, returns
    /// the union across all of the language's domains, concatenated in
    /// domain-load order with within-domain order preserved. The union is not
    /// deduplicated: a term appearing in two domains appears twice.
    pub fn get_glossary(
        &self,
        language: &str,
        domain: Option<&str>,
    ) -> Result<Vec<&TermRecord>, GlossaryError> {
        let language_domains = self
            .domains_by_language
            .get(language)
            .ok_or_else(|| GlossaryError::UnknownLanguage(language.to_string()))?;

        match domain {
            Some(domain) => {
                let glossary = self
                    .glossaries
                    .get(&(language.to_string(), domain.to_string()))
                    .ok_or_else(|| GlossaryError::UnknownDomain {
                        language: language.to_string(),
                        domain: domain.to_string(),
                    })?;
                Ok(glossary.records.iter().collect())
            }
            None => {
                let mut combined = Vec::new();
                for domain in language_domains {
                    if let Some(glossary) =
                        self.glossaries.get(&(language.to_string(), domain.clone()))
                    {
                        combined.extend(glossary.records.iter());
                    }
                }
                Ok(combined)
            }
        }
    }

    /// Exact-key lookup of a term within the resolved glossary.
    ///
    /// Comparison ignores case, matching the matcher's behavior. When the
    /// same term was loaded more than once, the first-loaded record wins.
    pub fn lookup_term(
        &self,
        language: &str,
        domain: Option<&str>,
        term: &str,
    ) -> Result<Option<&TermRecord>, GlossaryError> {
        let glossary = self.get_glossary(language, domain)?;
        let needle = term.trim().to_lowercase();
        Ok(glossary
            .into_iter()
            .find(|record| record.term.to_lowercase() == needle))
    }

    /// Find glossary term occurrences in a text.
    ///
    /// Returns (term, translation, start_offset) triples in left-to-right
    /// text order, one per occurrence.
    pub fn find_terms_in_text(
        &self,
        text: &str,
        language: &str,
        domain: Option<&str>,
    ) -> Result<Vec<(String, String, usize)>, GlossaryError> {
        let glossary = self.get_glossary(language, domain)?;
        let occurrences = matcher::find_occurrences(text, &glossary);

        Ok(occurrences
            .into_iter()
            .map(|occurrence| (occurrence.term, occurrence.translation, occurrence.start))
            .collect())
    }
}
