use num::{Float, NumCast};

use crate::utils::math::vector::SparseVec;
use crate::vectorizer::{corpus::Vocabulary, term::TermFrequency};

/// TF-IDF weighting strategy.
///
/// The fitted model calls `idf_vec` once at fit time and `tfidf_vec` for every
/// corpus document and every query, so a different weighting only needs a new
/// implementation of this trait.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDF weight for every vocabulary index
    /// # Arguments
    /// * `vocab` - fitted vocabulary with document frequencies
    /// # Returns
    /// * `Vec<N>` - weight at the same index as the term
    fn idf_vec(vocab: &Vocabulary) -> Vec<N>;

    /// Weighted vector of one document in the vocabulary space.
    /// Terms outside the vocabulary are dropped.
    /// # Arguments
    /// * `freq` - raw term counts of the document
    /// * `vocab` - fitted vocabulary
    /// * `idf` - output of `idf_vec` for the same vocabulary
    fn tfidf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> SparseVec<N>;
}

/// Default TF-IDF engine
///
/// - `idf(t) = ln((1 + N) / (1 + DF(t))) + 1` (smoothed, always positive)
/// - `w(t, d) = count(t, d) × idf(t)` (raw counts, no length normalization)
///
/// Works with `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF of a term found in `doc_freq` of `doc_num` documents.
    #[inline]
    pub fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(vocab: &Vocabulary) -> Vec<N> {
        let doc_num = vocab.doc_num();
        vocab
            .iter()
            .map(|(_, _, df)| <N as NumCast>::from(Self::idf(doc_num, df)).unwrap_or_else(N::one))
            .collect()
    }

    fn tfidf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> SparseVec<N> {
        let pairs: Vec<(usize, N)> = freq
            .iter()
            .filter_map(|(term, count)| {
                let idx = vocab.index_of(term)?;
                let weight = idf.get(idx).copied()?;
                let count = <N as NumCast>::from(count)?;
                Some((idx, count * weight))
            })
            .collect();
        SparseVec::from_pairs(pairs)
    }
}
