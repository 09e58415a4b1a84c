/// This crate recommends movies whose storyline matches a free-text query,
/// ranking them by TF-IDF cosine similarity.
pub mod vectorizer;
pub mod utils;
pub mod error;
pub mod config;
pub mod loader;

/// Fitted Model
/// The top-level struct of this crate. It is built once from the corpus by
/// `fit` and answers every query afterwards through `recommend`.
///
/// Internally, it holds:
/// - The corpus records
/// - The fixed vocabulary with document frequencies
/// - The IDF weights
/// - The corpus matrix (one sparse TF-IDF vector per record, with cached norms)
/// - The stopword set queries are normalized with
///
/// `FittedModel<N, E>` has the following generic parameters:
/// - `N`: Vector element type (f32 or f64, default f64)
/// - `E`: TF-IDF calculation engine type (default DefaultTFIDFEngine)
///
/// # Thread Safety
/// Immutable after fit, so it can be queried from many threads at once.
pub use vectorizer::FittedModel;

/// A ranked record and its cosine similarity
pub use vectorizer::Recommendation;

/// Number of recommendations when the caller has no preference (5)
pub use vectorizer::DEFAULT_TOP_K;

/// Model Handle
/// Shares the current `FittedModel` between readers and swaps in a freshly
/// fitted one atomically when the corpus is refreshed.
pub use vectorizer::handle::ModelHandle;

/// Corpus record and the structures built from the corpus
/// - `CorpusRecord`: (id, name, text) as supplied by the loader
/// - `Vocabulary`: term → dense index, with document frequencies
/// - `CorpusMatrix`: TF-IDF vector per record
pub use vectorizer::corpus::{CorpusMatrix, CorpusRecord, Vocabulary};

/// Text normalization
/// Strips non-letters, lowercases, splits on whitespace and removes stopwords.
/// The stopword set is passed in, `Stopwords::english()` being the usual choice.
pub use vectorizer::analyzer::{normalize, NormalizedDocument, Stopwords};

/// Term Frequency structure
/// Raw occurrence count of each term in one document.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// Defines how IDF weights and document vectors are computed.
/// `DefaultTFIDFEngine` uses smoothed IDF, `ln((1 + N) / (1 + DF)) + 1`,
/// multiplied by raw term counts.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked results, best first
/// - `HitEntry`: corpus position and score
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Sparse vector used for every document and query vector
pub use utils::math::vector::SparseVec;

/// Errors and the crate-wide result alias
pub use error::{RecommendError, Result};

/// Configuration loaded from TOML
pub use config::{CorpusConfig, RecommenderConfig};
