use std::fmt::{self, Debug, Display};

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{math::vector::SparseVec, sort::top_k_stable};
use crate::vectorizer::corpus::CorpusMatrix;

/// One ranked corpus entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEntry {
    /// position of the document in the corpus
    pub index: usize,
    /// cosine similarity in [0, 1]
    pub score: f64,
}

/// Structure to store ranking results, best first
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry> {
        self.list.iter()
    }

    /// Keep only the first `k` entries
    pub fn truncate(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }
}

impl IntoIterator for Hits {
    type Item = HitEntry;
    type IntoIter = std::vec::IntoIter<HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    #{}: {:.6}", hit.index, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. doc #{} ({:.4})", rank + 1, hit.index, hit.score)?;
        }
        Ok(())
    }
}

/// Cosine similarity of `query` against every row of `matrix`, in corpus order.
///
/// Rows are scored in parallel; the corpus-side norms are the cached ones.
/// A zero-norm operand scores 0. Scores are clamped into [0, 1].
pub fn cosine_scores<N>(query: &SparseVec<N>, matrix: &CorpusMatrix<N>) -> Vec<f64>
where
    N: Float + Into<f64> + Send + Sync,
{
    let query_norm = query.norm();
    matrix
        .par_iter()
        .map(|(row, row_norm)| {
            let score: f64 = query.cosine_with_norms(query_norm, row, row_norm).into();
            score.clamp(0.0, 1.0)
        })
        .collect()
}

/// Rank every row of `matrix` against `query` and keep the best `k`.
///
/// Ordered by descending score; equal scores keep corpus order.
/// `k` larger than the corpus returns every row. `k == 0` or an all-zero
/// query returns nothing without scoring.
pub fn rank<N>(query: &SparseVec<N>, matrix: &CorpusMatrix<N>, k: usize) -> Hits
where
    N: Float + Into<f64> + Send + Sync,
{
    if k == 0 || query.is_zero() {
        return Hits::default();
    }
    let entries: Vec<HitEntry> = cosine_scores(query, matrix)
        .into_iter()
        .enumerate()
        .map(|(index, score)| HitEntry { index, score })
        .collect();
    Hits::new(top_k_stable(entries, k, |hit| hit.score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec(pairs: &[(usize, f64)]) -> SparseVec<f64> {
        SparseVec::from_pairs(pairs.to_vec())
    }

    fn matrix() -> CorpusMatrix<f64> {
        CorpusMatrix::new(vec![
            vec(&[(0, 1.0)]),
            vec(&[(2, 1.0)]),
            vec(&[(0, 2.0)]),
            SparseVec::new(),
            vec(&[(0, 3.0), (3, 4.0)]),
        ])
    }

    fn scores(hits: &Hits) -> Vec<f64> {
        hits.iter().map(|h| h.score).collect()
    }

    fn indices(hits: &Hits) -> Vec<usize> {
        hits.iter().map(|h| h.index).collect()
    }

    #[test]
    fn scores_follow_corpus_order() {
        let query = vec(&[(0, 1.0)]);
        let scores = cosine_scores(&query, &matrix());
        assert_eq!(scores, vec![1.0, 0.0, 1.0, 0.0, 0.6]);
    }

    #[test]
    fn rank_is_descending_with_stable_ties() {
        let query = vec(&[(0, 1.0)]);
        let hits = rank(&query, &matrix(), 5);
        assert_eq!(hits.len(), 5);
        // rows 0 and 2 are parallel to the query; 1 and 3 score zero
        assert_eq!(indices(&hits), vec![0, 2, 4, 1, 3]);
        let s = scores(&hits);
        assert!(s.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn rank_length_is_min_of_k_and_corpus() {
        let query = vec(&[(2, 1.0)]);
        let m = matrix();
        assert_eq!(rank(&query, &m, 2).len(), 2);
        assert_eq!(rank(&query, &m, 5).len(), 5);
        assert_eq!(rank(&query, &m, 10).len(), 5);
        assert!(rank(&query, &m, 0).is_empty());
    }

    #[test]
    fn zero_query_ranks_nothing() {
        let m = matrix();
        assert!(rank(&SparseVec::new(), &m, 3).is_empty());
        // explicit zero weights are dropped, so this is a zero vector too
        assert!(rank(&vec(&[(0, 0.0), (2, 0.0)]), &m, 5).is_empty());
    }

    #[test]
    fn rank_is_deterministic() {
        let query = vec(&[(0, 0.3), (3, 2.0)]);
        let m = matrix();
        let first = rank(&query, &m, 4);
        for _ in 0..10 {
            assert_eq!(rank(&query, &m, 4), first);
        }
    }

    #[test]
    fn display_lists_ranks() {
        let hits = Hits::new(vec![HitEntry { index: 2, score: 0.5 }]);
        assert_eq!(hits.to_string(), "  1. doc #2 (0.5000)\n");
    }
}
