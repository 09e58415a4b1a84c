//! Text normalization: raw text to a sequence of lowercase alphabetic tokens.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::vectorizer::term::TermFrequency;

/// A set of words dropped during normalization.
///
/// Words are stored lowercase. The set is language data handed to the
/// normalizer, so callers decide where it comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The NLTK English list (about 180 function words) from the `stop-words`
    /// crate. Content words such as "young" or "world" are kept.
    pub fn english() -> Self {
        Self::from_words(stop_words::get(LANGUAGE::English).iter())
    }

    /// No stopwords at all.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build from any list of words. Matching is lowercase.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Extend the set with more words.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Checks if a (lowercase) token is a stopword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Ordered lowercase alphabetic tokens of one text, stopwords removed.
///
/// Empty input gives an empty document, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    tokens: Vec<String>,
}

impl NormalizedDocument {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw term counts of this document
    pub fn term_frequency(&self) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokens);
        freq
    }
}

impl<S> FromIterator<S> for NormalizedDocument
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Remove every character that is neither an ASCII letter nor whitespace.
///
/// Removed characters are not replaced, so "sci-fi" becomes "scifi" and
/// "R2D2" becomes "RD".
pub fn strip_non_alphabetic(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Normalize raw text.
///
/// 1. strip non-alphabetic characters
/// 2. lowercase
/// 3. split on whitespace
/// 4. drop stopwords
pub fn normalize(text: &str, stopwords: &Stopwords) -> NormalizedDocument {
    let stripped = strip_non_alphabetic(text).to_ascii_lowercase();
    stripped
        .split_whitespace()
        .filter(|tok| !stopwords.contains(tok))
        .collect()
}

/// Normalize a possibly missing text; `None` yields the empty document.
pub fn normalize_opt(text: Option<&str>, stopwords: &Stopwords) -> NormalizedDocument {
    match text {
        Some(text) => normalize(text, stopwords),
        None => NormalizedDocument::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(doc: &NormalizedDocument) -> Vec<&str> {
        doc.tokens().iter().map(String::as_str).collect()
    }

    #[test]
    fn lowercases_and_splits() {
        let doc = normalize("A Young WIZARD\tlearns\nmagic", &Stopwords::empty());
        assert_eq!(tokens(&doc), vec!["a", "young", "wizard", "learns", "magic"]);
    }

    #[test]
    fn removes_stopwords_keeping_order() {
        let stop = Stopwords::from_words(["a", "the", "at"]);
        let doc = normalize("A wizard learns magic at the school", &stop);
        assert_eq!(tokens(&doc), vec!["wizard", "learns", "magic", "school"]);
    }

    #[test]
    fn stripping_merges_fragments_without_substitution() {
        let doc = normalize("sci-fi R2D2 don't 2024 rock'n'roll", &Stopwords::empty());
        assert_eq!(tokens(&doc), vec!["scifi", "rd", "dont", "rocknroll"]);
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        let doc = normalize("café naïve Ωmega", &Stopwords::empty());
        assert_eq!(tokens(&doc), vec!["caf", "nave", "mega"]);
    }

    #[test]
    fn empty_and_symbol_only_input_yields_empty_document() {
        let stop = Stopwords::english();
        assert!(normalize("", &stop).is_empty());
        assert!(normalize("   \n\t ", &stop).is_empty());
        assert!(normalize("1234 !!! ... 42", &stop).is_empty());
        assert!(normalize_opt(None, &stop).is_empty());
    }

    #[test]
    fn english_stopwords_cover_common_words() {
        let stop = Stopwords::english();
        assert!(!stop.is_empty());
        for w in ["the", "and", "of", "a"] {
            assert!(stop.contains(w), "missing stopword {w}");
        }
        assert!(normalize("The and OF a", &stop).is_empty());
    }

    #[test]
    fn english_stopwords_keep_storyline_words() {
        let stop = Stopwords::english();
        assert!(stop.len() < 300, "expected the short function-word list, got {}", stop.len());
        for w in ["young", "man", "world", "new", "old", "home", "find", "year"] {
            assert!(!stop.contains(w), "{w} should not be a stopword");
        }
        let doc = normalize("A young wizard learns magic", &stop);
        assert_eq!(tokens(&doc), vec!["young", "wizard", "learns", "magic"]);
    }

    #[test]
    fn extra_stopwords_are_lowercased() {
        let stop = Stopwords::empty().with_extra(["Movie", "FILM"]);
        assert_eq!(stop.len(), 2);
        let doc = normalize("a movie about a film", &stop);
        assert_eq!(tokens(&doc), vec!["a", "about", "a"]);
    }

    #[test]
    fn term_frequency_counts_repeats() {
        let doc = normalize("magic magic school", &Stopwords::empty());
        let freq = doc.term_frequency();
        assert_eq!(freq.term_count("magic"), 2);
        assert_eq!(freq.term_count("school"), 1);
        assert_eq!(freq.term_sum(), 3);
    }
}
