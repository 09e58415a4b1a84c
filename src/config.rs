//! Recommender configuration.
//!
//! Parsed from TOML. Every field has a default, so an empty file (or no file)
//! gives a working setup for the IMDB storyline CSV.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{RecommendError, Result};
use crate::vectorizer::{analyzer::Stopwords, DEFAULT_TOP_K};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Recommendations per query.
    pub top_k: usize,
    /// Start from the built-in English stopword list.
    pub use_default_stopwords: bool,
    /// Words dropped in addition to the default list.
    pub extra_stopwords: Vec<String>,
    /// Where the corpus comes from.
    pub corpus: CorpusConfig,
}

/// Corpus file layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Column holding the display name.
    pub name_column: String,
    /// Column holding the storyline text.
    pub text_column: String,
    /// Column holding a unique id; the row number is used when unset.
    pub id_column: Option<String>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            use_default_stopwords: true,
            extra_stopwords: Vec::new(),
            corpus: CorpusConfig::default(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("imdb_2024_movies.csv"),
            name_column: "Movie Name".to_string(),
            text_column: "Storyline".to_string(),
            id_column: None,
        }
    }
}

impl RecommenderConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| RecommendError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// The stopword set this configuration describes.
    pub fn stopwords(&self) -> Stopwords {
        let base = if self.use_default_stopwords {
            Stopwords::english()
        } else {
            Stopwords::empty()
        };
        base.with_extra(&self.extra_stopwords)
    }
}
