pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod handle;
pub mod term;
pub mod tfidf;

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info, warn};
use num::Float;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{RecommendError, Result};
use crate::utils::math::vector::SparseVec;
use crate::vectorizer::{
    analyzer::{normalize, NormalizedDocument, Stopwords},
    corpus::{CorpusMatrix, CorpusRecord, Vocabulary},
    evaluate::scoring::{self, Hits},
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    term::TermFrequency,
};

/// Number of recommendations returned when the caller has no preference
pub const DEFAULT_TOP_K: usize = 5;

/// IDF weights of the fitted vocabulary
#[derive(Debug, Clone)]
pub struct IDFVector<N> {
    /// weight at the same index as the vocabulary term; dense
    pub idf_vec: Vec<N>,
}

/// A ranked corpus record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub record: &'a CorpusRecord,
    /// cosine similarity in [0, 1]
    pub score: f64,
}

/// Fitted TF-IDF model over a corpus
///
/// Built once by `fit` and immutable afterwards, so any number of threads can
/// query the same model through a shared reference. A refreshed corpus means a
/// new model; see `ModelHandle` for swapping one in.
///
/// `FittedModel<N, E>` has the following generic parameters:
/// - `N`: Vector element type (f32 or f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
#[derive(Debug, Clone)]
pub struct FittedModel<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// corpus records in load order; row `i` of the matrix belongs to record `i`
    records: Vec<CorpusRecord>,
    /// record id -> position
    id_index: HashMap<String, usize>,
    /// stopwords applied to the corpus and to every query
    stopwords: Stopwords,
    vocabulary: Vocabulary,
    idf: IDFVector<N>,
    matrix: CorpusMatrix<N>,
    _marker: std::marker::PhantomData<E>,
}

impl<N, E> FittedModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Fit on `records` with the English stopword list.
    pub fn fit(records: Vec<CorpusRecord>) -> Result<Self> {
        Self::fit_with_stopwords(records, Stopwords::english())
    }

    /// Fit on `records`, normalizing every text with `stopwords`.
    ///
    /// Fails only with `EmptyCorpus` on zero records. Records whose text
    /// normalizes to nothing are kept with an all-zero vector. When two records
    /// share an id both are ranked, but id lookups resolve to the first one.
    pub fn fit_with_stopwords(records: Vec<CorpusRecord>, stopwords: Stopwords) -> Result<Self> {
        if records.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }
        let start = Instant::now();

        let mut id_index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if id_index.contains_key(&record.id) {
                warn!(
                    "duplicate record id {} at position {}, lookups keep the first",
                    record.id, pos
                );
                continue;
            }
            id_index.insert(record.id.clone(), pos);
        }

        let freqs: Vec<TermFrequency> = records
            .par_iter()
            .map(|record| normalize(&record.text, &stopwords).term_frequency())
            .collect();
        for (record, freq) in records.iter().zip(&freqs) {
            if freq.is_empty() {
                debug!("record {} has no terms after normalization", record.id);
            }
        }

        let vocabulary = Vocabulary::build(&freqs);
        let idf = IDFVector {
            idf_vec: E::idf_vec(&vocabulary),
        };
        let rows: Vec<SparseVec<N>> = freqs
            .par_iter()
            .map(|freq| E::tfidf_vec(freq, &vocabulary, &idf.idf_vec))
            .collect();
        let matrix = CorpusMatrix::new(rows);

        info!(
            "fitted {} documents, vocabulary {} terms in {:.2?}",
            matrix.len(),
            vocabulary.len(),
            start.elapsed()
        );

        Ok(Self {
            records,
            id_index,
            stopwords,
            vocabulary,
            idf,
            matrix,
            _marker: std::marker::PhantomData,
        })
    }

    /// Normalize text with the stopwords this model was fitted with
    pub fn normalize(&self, text: &str) -> NormalizedDocument {
        normalize(text, &self.stopwords)
    }

    /// Vector of a normalized document in the fitted space.
    /// Never touches the vocabulary or the IDF weights.
    pub fn vectorize(&self, doc: &NormalizedDocument) -> SparseVec<N> {
        E::tfidf_vec(&doc.term_frequency(), &self.vocabulary, &self.idf.idf_vec)
    }

    /// Normalize then vectorize
    pub fn vectorize_text(&self, text: &str) -> SparseVec<N> {
        self.vectorize(&self.normalize(text))
    }

    /// Rank the corpus against an already built query vector.
    pub fn rank(&self, query: &SparseVec<N>, k: usize) -> Hits {
        scoring::rank(query, &self.matrix, k)
    }

    /// Recommend up to `k` records for a free-text query, best first.
    ///
    /// A query with no usable terms (empty, only stopwords or symbols, or only
    /// words the corpus never uses) gives an empty result, never an error.
    pub fn recommend(&self, query: &str, k: usize) -> Vec<Recommendation<'_>> {
        let doc = self.normalize(query);
        if doc.is_empty() {
            debug!("query has no terms after normalization");
            return Vec::new();
        }
        let query_vec = self.vectorize(&doc);
        if query_vec.is_zero() {
            debug!("query terms are all out of vocabulary");
            return Vec::new();
        }
        let hits = self.rank(&query_vec, k);
        debug!("ranked {} documents, returning {}", self.matrix.len(), hits.len());
        self.resolve(hits)
    }

    /// Records most similar to the record `id`, excluding that record.
    pub fn similar_to(&self, id: &str, k: usize) -> Result<Vec<Recommendation<'_>>> {
        let pos = *self
            .id_index
            .get(id)
            .ok_or_else(|| RecommendError::UnknownId(id.to_string()))?;
        let row = match self.matrix.row(pos) {
            Some(row) if !row.is_zero() => row,
            _ => return Ok(Vec::new()),
        };
        let mut hits = self.rank(row, k.saturating_add(1));
        hits.list.retain(|hit| hit.index != pos);
        hits.truncate(k);
        Ok(self.resolve(hits))
    }

    fn resolve(&self, hits: Hits) -> Vec<Recommendation<'_>> {
        hits.into_iter()
            .filter_map(|hit| {
                self.records.get(hit.index).map(|record| Recommendation {
                    record,
                    score: hit.score,
                })
            })
            .collect()
    }
}

/// Accessors
impl<N, E> FittedModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub fn records(&self) -> &[CorpusRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&CorpusRecord> {
        self.id_index.get(id).and_then(|&pos| self.records.get(pos))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &IDFVector<N> {
        &self.idf
    }

    pub fn matrix(&self) -> &CorpusMatrix<N> {
        &self.matrix
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn doc_num(&self) -> usize {
        self.records.len()
    }
}
