//! Watts–Strogatz small-world graph
//!
//! Vertices sit on a ring in creation order. Each vertex `i` first links to
//! its `k/2` clockwise neighbours, giving `n·k/2` lattice slots ordered by
//! `i`, then by distance. Each slot then gets one uniform draw; when it is
//! below `p` the slot's target moves to a vertex that is neither the source
//! nor already adjacent to it. Only targets change, so the edge count is
//! fixed.

use super::emit::Emitter;
use super::error::{GenerateError, GenerateResult};
use super::random::RandomSource;
use crate::backend::GraphBackend;
use rustc_hash::FxHashSet;

pub fn emit<B, R>(
    emitter: &mut Emitter<'_, B>,
    rng: &mut R,
    vertices: usize,
    neighbors: usize,
    rewire_probability: f64,
) -> GenerateResult<()>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    emitter.allocate_vertices(vertices)?;

    let mut slots = ring_lattice(vertices, neighbors / 2)?;

    // Undirected adjacency; a slot (u, v) appears in both sets
    let mut adjacency: Vec<FxHashSet<usize>> = vec![FxHashSet::default(); vertices];
    for &(u, v) in &slots {
        adjacency[u].insert(v);
        adjacency[v].insert(u);
    }

    for slot in slots.iter_mut() {
        if rng.uniform_float() >= rewire_probability {
            continue;
        }
        let (u, v) = *slot;
        let Some(w) = pick_unconnected(rng, &adjacency[u], u, vertices) else {
            // u is already adjacent to every other vertex
            continue;
        };
        adjacency[u].remove(&v);
        adjacency[v].remove(&u);
        adjacency[u].insert(w);
        adjacency[w].insert(u);
        slot.1 = w;
    }

    for (u, v) in slots {
        emitter.link(u, v)?;
    }
    Ok(())
}

/// Slots `(i, (i + d) mod n)` for `i` in `0..n`, `d` in `1..=half`
fn ring_lattice(n: usize, half: usize) -> GenerateResult<Vec<(usize, usize)>> {
    let len = n
        .checked_mul(half)
        .ok_or_else(|| GenerateError::Allocation(format!("{} x {} lattice slots overflow", n, half)))?;
    let mut slots = Vec::new();
    slots.try_reserve_exact(len)?;
    for i in 0..n {
        for d in 1..=half {
            slots.push((i, (i + d) % n));
        }
    }
    Ok(slots)
}

/// Uniformly pick a vertex other than `source` and outside `adjacent`
///
/// Rejection sampling while at least half the ring is free; otherwise the
/// r-th free vertex is found by a linear scan so sampling always terminates.
fn pick_unconnected<R: RandomSource + ?Sized>(
    rng: &mut R,
    adjacent: &FxHashSet<usize>,
    source: usize,
    n: usize,
) -> Option<usize> {
    let free = n - 1 - adjacent.len();
    if free == 0 {
        return None;
    }

    if free * 2 >= n {
        loop {
            let w = rng.uniform_int(n as u64) as usize;
            if w != source && !adjacent.contains(&w) {
                return Some(w);
            }
        }
    }

    let mut remaining = rng.uniform_int(free as u64) as usize;
    for w in 0..n {
        if w == source || adjacent.contains(&w) {
            continue;
        }
        if remaining == 0 {
            return Some(w);
        }
        remaining -= 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::testing::ScriptedRandom;
    use crate::generator::spec::Topology;
    use crate::generator::testing::{index_pairs, run, run_seeded};
    use std::collections::HashSet;

    fn ws(vertices: usize, neighbors: usize, rewire_probability: f64) -> Topology {
        Topology::WattsStrogatz {
            vertices,
            neighbors,
            rewire_probability,
        }
    }

    fn undirected(pairs: &[(usize, usize)]) -> HashSet<(usize, usize)> {
        pairs.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
    }

    #[test]
    fn test_lattice_without_rewiring() {
        let (store, report) = run_seeded(ws(10, 4, 0.0), false, 9);
        assert_eq!(report.edge_count, 20);
        assert_eq!(index_pairs(&store), ring_lattice(10, 2).unwrap());
    }

    #[test]
    fn test_lattice_order() {
        assert_eq!(
            ring_lattice(5, 2).unwrap(),
            vec![
                (0, 1), (0, 2), (1, 2), (1, 3), (2, 3),
                (2, 4), (3, 4), (3, 0), (4, 0), (4, 1),
            ]
        );
    }

    #[test]
    fn test_scripted_rewire() {
        // Slot (0,1) rewires; 0 is adjacent to {1, 4}, free vertices are [2, 3]
        let floats = [0.0, 0.9, 0.9, 0.9, 0.9];
        let (store, report) = run(ws(5, 2, 0.5), false, &floats, &[1]);
        assert_eq!(report.edge_count, 5);
        assert_eq!(
            index_pairs(&store),
            vec![(0, 3), (1, 2), (2, 3), (3, 4), (4, 0)]
        );
    }

    #[test]
    fn test_saturated_ring_is_left_alone() {
        // n = k + 1: the lattice is already complete, nothing to rewire to
        let (store, _) = run_seeded(ws(3, 2, 1.0), false, 4);
        assert_eq!(index_pairs(&store), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_full_rewiring_preserves_count() {
        let (store, report) = run_seeded(ws(30, 4, 1.0), false, 21);
        assert_eq!(report.edge_count, 60);

        let pairs = index_pairs(&store);
        assert!(pairs.iter().all(|&(a, b)| a != b));
        assert_eq!(undirected(&pairs).len(), 60);
        assert_ne!(undirected(&pairs), undirected(&ring_lattice(30, 2).unwrap()));
    }

    #[test]
    fn test_full_rewiring_moves_every_slot() {
        let lattice = ring_lattice(30, 2).unwrap();
        for seed in 0..20 {
            let (store, _) = run_seeded(ws(30, 4, 1.0), false, seed);
            let pairs = index_pairs(&store);
            assert_eq!(pairs.len(), lattice.len());
            for (slot, (&(u, v), &(s, t))) in lattice.iter().zip(&pairs).enumerate() {
                assert_eq!(s, u, "slot {} changed source", slot);
                assert_ne!(t, v, "slot {} kept its lattice target", slot);
            }
        }
    }

    #[test]
    fn test_bidirectional_has_no_duplicate_directed_edges() {
        let (store, report) = run_seeded(ws(16, 6, 0.3), true, 8);
        assert_eq!(report.edge_count, 96);

        let directed: HashSet<_> = index_pairs(&store).into_iter().collect();
        assert_eq!(directed.len(), 96);
    }

    #[test]
    fn test_pick_unconnected_scan() {
        let adjacent: FxHashSet<usize> = [1, 2, 3, 5, 6].into_iter().collect();
        // n = 8, source 0: free = [4, 7], below half the ring -> scan
        let mut rng = ScriptedRandom::new(&[], &[1]);
        assert_eq!(pick_unconnected(&mut rng, &adjacent, 0, 8), Some(7));

        let full: FxHashSet<usize> = (1..8).collect();
        assert_eq!(pick_unconnected(&mut rng, &full, 0, 8), None);
    }

    #[test]
    fn test_pick_unconnected_rejection() {
        let adjacent: FxHashSet<usize> = [1].into_iter().collect();
        // 0 is the source and 1 adjacent; both get rejected
        let mut rng = ScriptedRandom::new(&[], &[0, 1, 5]);
        assert_eq!(pick_unconnected(&mut rng, &adjacent, 0, 8), Some(5));
    }
}
