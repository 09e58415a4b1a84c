pub mod math;

use std::fmt::Debug;

use num::Float;
use serde::{Deserialize, Serialize};

/// SparseVec is a sparse vector that stores only its non-zero entries.
/// It holds `inds` and `vals`:
/// `inds` keeps the dimension index of each entry,
/// `vals` keeps the value at the same position.
///
/// Entries are guaranteed to be sorted by ascending index, with no duplicates
/// and no explicit zeros. A vector with no entries is the all-zero vector.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SparseVec<N> {
    inds: Vec<usize>,
    vals: Vec<N>,
}

impl<N> SparseVec<N>
where
    N: Float,
{
    #[inline]
    pub fn new() -> Self {
        SparseVec {
            inds: Vec::new(),
            vals: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        SparseVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Duplicate indices are summed, zero values are dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, N)>) -> Self {
        pairs.sort_unstable_by_key(|&(idx, _)| idx);
        let mut vec = SparseVec::with_capacity(pairs.len());
        for (idx, val) in pairs {
            match vec.inds.last() {
                Some(&last) if last == idx => {
                    if let Some(acc) = vec.vals.last_mut() {
                        *acc = *acc + val;
                    }
                }
                _ => {
                    vec.inds.push(idx);
                    vec.vals.push(val);
                }
            }
        }
        vec.drop_zeros();
        vec
    }

    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|v| !v.is_zero()) {
            return;
        }
        let (inds, vals): (Vec<usize>, Vec<N>) = self
            .inds
            .iter()
            .copied()
            .zip(self.vals.iter().copied())
            .filter(|(_, v)| !v.is_zero())
            .unzip();
        self.inds = inds;
        self.vals = vals;
    }

    /// Number of non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// True for the all-zero vector
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Value at `index`, zero when the entry is absent
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        self.inds.binary_search(&index).is_ok()
    }

    /// Iterate the non-zero entries as `(index, value)` in ascending index order.
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.inds
    }

    #[inline]
    pub fn values(&self) -> &[N] {
        &self.vals
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Debug for SparseVec<N>
where
    N: Float + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.raw_iter()).finish()
    }
}
