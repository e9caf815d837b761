//! Erdős–Rényi G(n, p)
//!
//! Every unordered pair `(i, j)`, `i < j`, gets exactly one uniform draw `r`
//! and becomes an edge when `r < p`. Since `r` lies in `[0, 1)`, `p = 0`
//! yields no edges and `p = 1` yields all of them. Pairs are visited with
//! `i` ascending, then `j` ascending.

use super::emit::Emitter;
use super::error::GenerateResult;
use super::random::RandomSource;
use crate::backend::GraphBackend;

pub fn emit<B, R>(
    emitter: &mut Emitter<'_, B>,
    rng: &mut R,
    vertices: usize,
    probability: f64,
) -> GenerateResult<()>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    emitter.allocate_vertices(vertices)?;

    for i in 0..vertices {
        for j in (i + 1)..vertices {
            if rng.uniform_float() < probability {
                emitter.link(i, j)?;
            }
        }
    }
    Ok(())
}
