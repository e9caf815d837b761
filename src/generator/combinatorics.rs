//! Counting and sampling over unordered vertex pairs
//!
//! Pairs `(i, j)` with `i < j < n` are ranked lexicographically:
//! `(0,1), (0,2), …, (0,n-1), (1,2), …`. Rank `r` belongs to row `i` when
//! `row_start(i) <= r < row_start(i) + (n - 1 - i)`.

use super::random::RandomSource;
use rustc_hash::FxHashSet;

/// `C(n, k)` via the running product `c = c * (n - k + i) / i`
///
/// Each intermediate value is itself a binomial coefficient, so the division
/// is exact. Returns `None` when the result does not fit in a `u64`.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k as u128 {
        acc = acc.checked_mul(n as u128 - k as u128 + i)? / i;
    }
    u64::try_from(acc).ok()
}

/// Number of unordered pairs among `n` vertices
pub fn pair_count(n: u64) -> Option<u64> {
    binomial(n, 2)
}

/// Draw `m` distinct values from `[0, total)` (Robert Floyd's algorithm)
///
/// Uses `O(m)` memory and exactly `m` integer draws. The result is sorted.
/// When `m == total` every value is returned without drawing.
pub fn sample_distinct<R: RandomSource + ?Sized>(rng: &mut R, total: u64, m: u64) -> Vec<u64> {
    debug_assert!(m <= total);
    if m >= total {
        return (0..total).collect();
    }

    let mut chosen: FxHashSet<u64> = FxHashSet::default();
    chosen.reserve(m as usize);
    for j in (total - m)..total {
        let t = rng.uniform_int(j + 1);
        if !chosen.insert(t) {
            chosen.insert(j);
        }
    }

    let mut ranks: Vec<u64> = chosen.into_iter().collect();
    ranks.sort_unstable();
    ranks
}

/// Walks sorted ranks forward and yields their `(i, j)` pairs
///
/// Total work is `O(n + ranks)` because the row cursor only moves forward.
#[derive(Debug)]
pub struct PairUnranker {
    n: u64,
    row: u64,
    row_start: u64,
}

impl PairUnranker {
    pub fn new(n: u64) -> Self {
        PairUnranker {
            n,
            row: 0,
            row_start: 0,
        }
    }

    /// Unrank `rank`; ranks must be fed in non-decreasing order
    pub fn unrank(&mut self, rank: u64) -> (u64, u64) {
        loop {
            let row_len = self.n - 1 - self.row;
            if rank < self.row_start + row_len {
                let j = self.row + 1 + (rank - self.row_start);
                return (self.row, j);
            }
            self.row_start += row_len;
            self.row += 1;
        }
    }
}
