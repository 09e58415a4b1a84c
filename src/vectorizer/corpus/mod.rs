use indexmap::IndexSet;
use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::math::vector::SparseVec;
use crate::vectorizer::term::TermFrequency;

/// One item of the corpus as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// stable unique identifier
    pub id: String,
    /// display name
    pub name: String,
    /// free-text description the ranking works on
    pub text: String,
}

impl CorpusRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Fixed vocabulary of the fitted corpus with its document frequencies.
///
/// Indices are dense, 0-based and assigned in first-seen order over the
/// corpus. It is built once and never grows afterwards; terms it does not
/// hold are out of vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
    /// number of documents containing the term at the same index
    doc_freq: Vec<u64>,
    doc_num: u64,
}

impl Vocabulary {
    /// Build from the term frequencies of every corpus document, in corpus order.
    pub fn build<'a, I>(docs: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        let mut doc_freq: Vec<u64> = Vec::new();
        let mut doc_num = 0u64;
        for doc in docs {
            doc_num += 1;
            // each distinct term of a document counts once
            for (term, _) in doc.iter() {
                let idx = match terms.get_index_of(term) {
                    Some(idx) => idx,
                    None => {
                        terms.insert(Box::from(term));
                        doc_freq.push(0);
                        terms.len() - 1
                    }
                };
                doc_freq[idx] += 1;
            }
        }
        Self {
            terms,
            doc_freq,
            doc_num,
        }
    }

    /// Index of a term, `None` when out of vocabulary
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term stored at an index
    #[inline]
    pub fn term_at(&self, idx: usize) -> Option<&str> {
        self.terms.get_index(idx).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Document frequency of the term at `idx`, zero when out of range
    #[inline]
    pub fn doc_freq(&self, idx: usize) -> u64 {
        self.doc_freq.get(idx).copied().unwrap_or(0)
    }

    /// Number of documents the vocabulary was built from
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(index, term, document frequency)` in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, u64)> {
        self.terms
            .iter()
            .zip(self.doc_freq.iter())
            .enumerate()
            .map(|(idx, (term, &df))| (idx, term.as_ref(), df))
    }
}

/// TF-IDF vectors of every corpus document, in corpus order, with their norms.
/// Read-only after fit.
#[derive(Debug, Clone)]
pub struct CorpusMatrix<N>
where
    N: Float,
{
    rows: Vec<SparseVec<N>>,
    norms: Vec<N>,
}

impl<N> CorpusMatrix<N>
where
    N: Float + Send + Sync,
{
    pub fn new(mut rows: Vec<SparseVec<N>>) -> Self {
        rows.iter_mut().for_each(SparseVec::shrink_to_fit);
        let norms = rows.par_iter().map(SparseVec::norm).collect();
        Self { rows, norms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn row(&self, idx: usize) -> Option<&SparseVec<N>> {
        self.rows.get(idx)
    }

    /// Cached euclidean norm of a row
    #[inline]
    pub fn norm(&self, idx: usize) -> Option<N> {
        self.norms.get(idx).copied()
    }

    /// `(row, norm)` pairs in corpus order
    pub fn iter(&self) -> impl Iterator<Item = (&SparseVec<N>, N)> {
        self.rows.iter().zip(self.norms.iter().copied())
    }

    /// Parallel `(row, norm)` pairs; indexed, so `collect` keeps corpus order
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = (&SparseVec<N>, N)> {
        self.rows.par_iter().zip(self.norms.par_iter().copied())
    }
}
