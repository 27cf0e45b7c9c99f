/*!
 * Main translation entry point.
 *
 * `Terminex` owns an immutable glossary store and applies glossary-controlled
 * term substitution to input texts. Each call is a pure function of the
 * input and the store snapshot: no state is shared between calls, so
 * independent calls may run in parallel without coordination.
 */

use std::path::Path;

use log::debug;

use crate::errors::GlossaryError;
use crate::glossary::{matcher, GlossaryStore};
use crate::glossary_loader;

/// Output of one translation call.
///
/// Created fresh per call and immutable once returned; shares no ownership
/// with the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// Input text as given
    pub original_text: String,

    /// Text with matched terms replaced by their curated translations
    pub translated_text: String,

    /// (term, translation) pairs in the order the terms occur in the input,
    /// one entry per occurrence
    pub terms_used: Vec<(String, String)>,
}

/// Glossary-controlled term translator
#[derive(Debug)]
pub struct Terminex {
    store: GlossaryStore,
}

impl Terminex {
    /// Build a translator from a directory of glossary CSV files.
    ///
    /// Unusable sources are skipped with a warning during discovery; when
    /// nothing usable is found at all, this fails with
    /// `GlossaryError::EmptyStore`.
    pub fn new<P: AsRef<Path>>(glossary_dir: P) -> Result<Self, GlossaryError> {
        let feed = glossary_loader::load_glossary_dir(glossary_dir);
        let store = GlossaryStore::from_records(feed)?;
        Ok(Terminex { store })
    }

    /// Build a translator around an already-constructed store
    pub fn with_store(store: GlossaryStore) -> Self {
        Terminex { store }
    }

    /// The underlying read-only glossary store
    pub fn store(&self) -> &GlossaryStore {
        &self.store
    }

    /// Translate a single text.
    ///
    /// `target_language` must be available in the store; `domain`, if given,
    /// must be available for that language. When the domain is omitted,
    /// matching runs against the union of the language's domains. A text with
    /// no matching terms comes back unchanged with empty `terms_used`.
    pub fn translate(
        &self,
        text: &str,
        target_language: &str,
        domain: Option<&str>,
    ) -> Result<TranslationResult, GlossaryError> {
        let glossary = self.store.get_glossary(target_language, domain)?;

        let occurrences = matcher::find_occurrences(text, &glossary);
        let translated_text = matcher::substitute(text, &occurrences);

        debug!(
            "Translated text ({} chars) to '{}': {} term occurrence(s)",
            text.chars().count(),
            target_language,
            occurrences.len()
        );

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text,
            terms_used: occurrences
                .into_iter()
                .map(|occurrence| (occurrence.term, occurrence.translation))
                .collect(),
        })
    }

    /// Translate an ordered batch of texts.
    ///
    /// Each text is matched and substituted independently, and results come
    /// back in input order. The first error aborts the whole call: partial
    /// batch results are never returned.
    pub fn translate_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
        target_language: &str,
        domain: Option<&str>,
    ) -> Result<Vec<TranslationResult>, GlossaryError> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.translate(text.as_ref(), target_language, domain)?);
        }
        Ok(results)
    }
}
