use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::info;
use num::Float;
use parking_lot::RwLock;

use crate::error::Result;
use crate::vectorizer::{
    analyzer::Stopwords,
    corpus::CorpusRecord,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    FittedModel,
};

/// Shared handle to the current fitted model.
///
/// Readers take a snapshot (`Arc`) and query it without holding any lock.
/// A re-fit builds the new model first and then swaps the pointer, so a
/// query in flight finishes against the snapshot it started with.
#[derive(Debug)]
pub struct ModelHandle<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    current: RwLock<Arc<FittedModel<N, E>>>,
    /// bumped on every swap
    generation: AtomicU64,
}

impl<N, E> ModelHandle<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub fn new(model: FittedModel<N, E>) -> Self {
        Self {
            current: RwLock::new(Arc::new(model)),
            generation: AtomicU64::new(0),
        }
    }

    /// The model queries should run against right now
    pub fn snapshot(&self) -> Arc<FittedModel<N, E>> {
        Arc::clone(&self.current.read())
    }

    /// Install `model`, returning the one it replaces.
    pub fn replace(&self, model: FittedModel<N, E>) -> Arc<FittedModel<N, E>> {
        let model = Arc::new(model);
        let old = std::mem::replace(&mut *self.current.write(), model);
        self.generation.fetch_add(1, Ordering::Release);
        old
    }

    /// Fit a fresh model on `records` and swap it in.
    ///
    /// The fit runs without holding the lock. On error the current model
    /// stays in place.
    pub fn refit(
        &self,
        records: Vec<CorpusRecord>,
        stopwords: Stopwords,
    ) -> Result<Arc<FittedModel<N, E>>> {
        let model = FittedModel::fit_with_stopwords(records, stopwords)?;
        let old = self.replace(model);
        info!("model swapped, generation {}", self.generation());
        Ok(old)
    }

    /// Number of swaps since creation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
