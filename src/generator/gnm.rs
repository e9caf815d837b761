//! Erdős–Rényi G(n, m)
//!
//! Exactly `m` distinct pairs are drawn uniformly from the `C(n, 2)`
//! unordered pairs. Pairs are never materialized: `m` ranks are sampled
//! without replacement and unranked in ascending order.

use super::combinatorics::{pair_count, sample_distinct, PairUnranker};
use super::emit::Emitter;
use super::error::{GenerateError, GenerateResult};
use super::random::RandomSource;
use crate::backend::GraphBackend;

pub fn emit<B, R>(
    emitter: &mut Emitter<'_, B>,
    rng: &mut R,
    vertices: usize,
    edges: usize,
) -> GenerateResult<()>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let n = vertices as u64;
    let total = pair_count(n).ok_or_else(|| {
        GenerateError::Allocation(format!("pair space of {} vertices overflows", vertices))
    })?;

    emitter.allocate_vertices(vertices)?;

    let ranks = sample_distinct(rng, total, edges as u64);
    let mut unranker = PairUnranker::new(n);
    for rank in ranks {
        let (i, j) = unranker.unrank(rank);
        emitter.link(i as usize, j as usize)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::generator::spec::Topology;
    use crate::generator::testing::{index_pairs, run, run_seeded};
    use std::collections::{HashMap, HashSet};

    fn gnm(vertices: usize, edges: usize) -> Topology {
        Topology::ErdosRenyiGnm { vertices, edges }
    }

    #[test]
    fn test_zero_edges() {
        let (store, report) = run_seeded(gnm(5, 0), true, 3);
        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.edge_count, 0);
        assert_eq!(store.edge_count("g"), 0);
    }

    #[test]
    fn test_all_pairs_without_draws() {
        // No scripted ints: saturating m must not consume randomness
        let (store, report) = run(gnm(5, 10), false, &[], &[]);
        assert_eq!(report.edge_count, 10);

        let mut expected = Vec::new();
        for i in 0..5 {
            for j in (i + 1)..5 {
                expected.push((i, j));
            }
        }
        assert_eq!(index_pairs(&store), expected);
    }

    #[test]
    fn test_scripted_selection() {
        // Floyd over total = 10, m = 2: j = 8 draws 8, j = 9 draws 8 again -> takes 9
        let (store, _) = run(gnm(5, 2), false, &[], &[8, 8]);
        assert_eq!(index_pairs(&store), vec![(2, 4), (3, 4)]);
    }

    #[test]
    fn test_exact_distinct_edges() {
        for (n, m) in [(10, 1), (10, 23), (10, 44), (40, 300)] {
            let (store, report) = run_seeded(gnm(n, m), false, 11);
            assert_eq!(report.edge_count, m as u64);

            let pairs = index_pairs(&store);
            let unique: HashSet<_> = pairs
                .iter()
                .map(|&(a, b)| (a.min(b), a.max(b)))
                .collect();
            assert_eq!(unique.len(), m);
            assert!(pairs.iter().all(|&(a, b)| a < b));
        }
    }

    #[test]
    fn test_bidirectional_doubles() {
        let (store, report) = run_seeded(gnm(8, 12), true, 2);
        assert_eq!(report.edge_count, 24);

        let directed: HashSet<_> = index_pairs(&store).into_iter().collect();
        assert_eq!(directed.len(), 24);
        for &(a, b) in &directed {
            assert!(directed.contains(&(b, a)));
        }
    }

    #[test]
    fn test_single_edge_is_uniform_over_pairs() {
        // 6 pairs, 6000 runs: each pair expected 1000 times (sd ~29)
        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for seed in 0..6000 {
            let (store, _) = run_seeded(gnm(4, 1), false, seed);
            *counts.entry(index_pairs(&store)[0]).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (pair, n) in counts {
            assert!((850..=1150).contains(&n), "{:?} chosen {} times", pair, n);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let (a, _) = run_seeded(gnm(30, 100), false, 1234);
        let (b, _) = run_seeded(gnm(30, 100), false, 1234);
        assert_eq!(index_pairs(&a), index_pairs(&b));
    }
}
