use std::cmp::Ordering;

/// Stable top-K selection by descending score.
/// - Keeps the `k` highest-scoring items, highest first
/// - Items with equal score keep their input order
/// - NaN scores sort below every real score
///
/// Complexity: O(n) selection + O(k log k) sort of the survivors.
pub fn top_k_stable<T, F>(items: Vec<T>, k: usize, score: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    if k == 0 || items.is_empty() {
        return Vec::new();
    }

    let mut keyed: Vec<(usize, f64, T)> = items
        .into_iter()
        .enumerate()
        .map(|(pos, item)| {
            let s = score(&item);
            (pos, if s.is_nan() { f64::NEG_INFINITY } else { s }, item)
        })
        .collect();

    // (score desc, input position asc) is a total order, so the unstable
    // selection and sort below still give one deterministic answer.
    let cmp = |a: &(usize, f64, T), b: &(usize, f64, T)| -> Ordering {
        b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
    };

    if k < keyed.len() {
        keyed.select_nth_unstable_by(k - 1, cmp);
        keyed.truncate(k);
    }
    keyed.sort_unstable_by(cmp);
    keyed.into_iter().map(|(_, _, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// tiny deterministic PRNG (xorshift32)
    struct Rng(u32);
    impl Rng {
        fn new(seed: u32) -> Self {
            Self(seed)
        }
        fn next_u32(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }
    }

    /// stable sort of the whole input, then cut
    fn baseline(items: &[(usize, f64)], k: usize) -> Vec<(usize, f64)> {
        let mut all = items.to_vec();
        all.sort_by(|a, b| b.1.total_cmp(&a.1));
        all.truncate(k);
        all
    }

    #[test]
    fn top_k_handles_empty_and_zero_k() {
        let empty: Vec<(usize, f64)> = Vec::new();
        assert!(top_k_stable(empty, 3, |x| x.1).is_empty());
        assert!(top_k_stable(vec![(0usize, 1.0f64)], 0, |x| x.1).is_empty());
    }

    #[test]
    fn top_k_larger_than_input_returns_everything() {
        let items = vec![(0usize, 0.2f64), (1, 0.9), (2, 0.5)];
        let out = top_k_stable(items, 10, |x| x.1);
        assert_eq!(out, vec![(1, 0.9), (2, 0.5), (0, 0.2)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![(0usize, 0.5f64), (1, 0.7), (2, 0.5), (3, 0.7), (4, 0.5)];
        let out = top_k_stable(items, 4, |x| x.1);
        assert_eq!(out, vec![(1, 0.7), (3, 0.7), (0, 0.5), (2, 0.5)]);
    }

    #[test]
    fn nan_sorts_last() {
        let items = vec![(0usize, f64::NAN), (1, 0.0), (2, 0.3)];
        let out = top_k_stable(items, 3, |x| x.1);
        assert_eq!(out[0], (2, 0.3));
        assert_eq!(out[1], (1, 0.0));
        assert_eq!(out[2].0, 0);
    }

    #[test]
    fn matches_stable_baseline_many_sizes() {
        let mut rng = Rng::new(0x1234_5678);
        for &n in &[1usize, 2, 3, 7, 16, 33, 64, 129, 500] {
            // few distinct scores so ties are common
            let items: Vec<(usize, f64)> = (0..n)
                .map(|i| (i, (rng.next_u32() % 8) as f64 / 8.0))
                .collect();
            for &k in &[1usize, 2, 5, n / 2 + 1, n, n + 3] {
                let out = top_k_stable(items.clone(), k, |x| x.1);
                assert_eq!(out, baseline(&items, k), "mismatch at n={n} k={k}");
            }
        }
    }
}
