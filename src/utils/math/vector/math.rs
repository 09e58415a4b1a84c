use std::cmp::Ordering;

use num::Float;

use super::SparseVec;

impl<N> SparseVec<N>
where
    N: Float,
{
    /// Dot product over the overlap of non-zero entries.
    ///
    /// # Arguments
    /// * `other` - other vector
    ///
    /// # Returns
    /// * `N` - Σ(a_i * b_i)
    #[inline]
    pub fn dot(&self, other: &Self) -> N {
        let mut result = N::zero();
        if self.is_zero() || other.is_zero() {
            return result;
        }

        let self_inds = self.indices();
        let self_vals = self.values();
        let other_inds = other.indices();
        let other_vals = other.values();

        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    result = result + self_vals[i] * other_vals[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// Σ(a_i^2)
    #[inline]
    pub fn norm_sq(&self) -> N {
        self.values()
            .iter()
            .fold(N::zero(), |acc, &v| acc + v * v)
    }

    /// Euclidean norm ||a||
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    /// Cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// Zero whenever either vector has zero norm.
    #[inline]
    pub fn cosine_similarity(&self, other: &Self) -> N {
        self.cosine_with_norms(self.norm(), other, other.norm())
    }

    /// Cosine similarity with both norms already known.
    /// The corpus side keeps its norms cached, so the per-query cost is the overlap only.
    #[inline]
    pub fn cosine_with_norms(&self, self_norm: N, other: &Self, other_norm: N) -> N {
        if self_norm.is_zero() || other_norm.is_zero() {
            return N::zero();
        }
        let cos = self.dot(other) / (self_norm * other_norm);
        // rounding can push |cos| a hair past 1
        cos.max(-N::one()).min(N::one())
    }
}
