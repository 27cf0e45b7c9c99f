/*!
 * Term matching and substitution over a resolved glossary.
 *
 * Naive iterative string replacement corrupts text when one term is a
 * substring of another ("acre" inside "acreage"), so matching is an
 * explicit candidate-ranking scan: at each word start, every glossary
 * term that matches case-insensitively under word-boundary checks is
 * considered, the longest wins, and equal lengths fall back to glossary
 * load order. Consumed spans are never re-entered, so occurrences can
 * never overlap.
 */

use crate::glossary::store::TermRecord;

/// One matched position of a term within an input text.
///
/// Offsets are byte offsets into the original text, always on char
/// boundaries. `term` carries the canonical glossary surface form, not
/// the casing found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermOccurrence {
    /// Canonical glossary term that matched
    pub term: String,

    /// Curated translation for the term
    pub translation: String,

    /// Byte offset of the start of the matched span
    pub start: usize,

    /// Byte offset one past the end of the matched span
    pub end: usize,
}

/// Find all glossary term occurrences in `text`, in left-to-right order.
///
/// Matching is case-insensitive but offsets index the original text.
/// A term only matches at a word boundary on both ends, the longest
/// candidate wins at each position, and matched spans never overlap.
pub fn find_occurrences(text: &str, glossary: &[&TermRecord]) -> Vec<TermOccurrence> {
    // Lowercase each candidate once up front; load order is the tie-break.
    // Blank terms are rejected at load time, but a zero-length match would
    // stall the scan, so they are filtered here as well.
    let candidates: Vec<(String, usize, &TermRecord)> = glossary
        .iter()
        .filter(|record| !record.term.trim().is_empty())
        .map(|record| {
            let lowered = record.term.to_lowercase();
            let char_len = lowered.chars().count();
            (lowered, char_len, *record)
        })
        .collect();

    let mut occurrences = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let mut best: Option<(usize, usize, usize)> = None; // (char_len, candidate index, end)

        if boundary_before(text, pos) {
            for (index, (lowered, char_len, _)) in candidates.iter().enumerate() {
                if let Some(end) = match_at(text, pos, lowered) {
                    if boundary_after(text, end) {
                        // Strictly longer replaces; equal length keeps the
                        // earlier-loaded candidate.
                        let better = match best {
                            None => true,
                            Some((best_len, _, _)) => *char_len > best_len,
                        };
                        if better {
                            best = Some((*char_len, index, end));
                        }
                    }
                }
            }
        }

        match best {
            Some((_, index, end)) => {
                let record = candidates[index].2;
                occurrences.push(TermOccurrence {
                    term: record.term.clone(),
                    translation: record.translation.clone(),
                    start: pos,
                    end,
                });
                pos = end;
            }
            None => {
                pos += text[pos..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
            }
        }
    }

    occurrences
}

/// Splice translations into the matched spans of `text`.
///
/// Occurrences must be non-overlapping and in ascending order, as produced
/// by `find_occurrences`. Text outside matched spans is copied byte-exact,
/// with no whitespace normalization.
pub fn substitute(text: &str, occurrences: &[TermOccurrence]) -> String {
    let mut translated = String::with_capacity(text.len());
    let mut cursor = 0;

    for occurrence in occurrences {
        translated.push_str(&text[cursor..occurrence.start]);
        translated.push_str(&occurrence.translation);
        cursor = occurrence.end;
    }
    translated.push_str(&text[cursor..]);

    translated
}

/// Case-insensitive match of `term_lower` against `text` starting at `start`.
///
/// Walks whole chars of the original text, comparing their full
/// `to_lowercase` expansions, so the returned end offset is always a valid
/// char boundary of `text`. A term that would end mid-expansion does not
/// match.
fn match_at(text: &str, start: usize, term_lower: &str) -> Option<usize> {
    let mut term_chars = term_lower.chars();
    let mut next_term = term_chars.next();

    for (offset, c) in text[start..].char_indices() {
        if next_term.is_none() {
            return Some(start + offset);
        }
        for lowered in c.to_lowercase() {
            match next_term {
                Some(expected) if expected == lowered => next_term = term_chars.next(),
                _ => return None,
            }
        }
    }

    if next_term.is_none() {
        Some(text.len())
    } else {
        None
    }
}

/// Whether `pos` sits at the start of a word (no alphanumeric char before it)
fn boundary_before(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

/// Whether `end` sits at the end of a word (no alphanumeric char after it)
fn boundary_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric())
}
