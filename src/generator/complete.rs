//! Complete graph K(n)
//!
//! One edge per unordered pair `(i, j)`, `i < j`, directed from the lower
//! index to the higher one: `n(n-1)/2` edges, no self-loops.

use super::emit::Emitter;
use super::error::GenerateResult;
use crate::backend::GraphBackend;

pub fn emit<B: GraphBackend + ?Sized>(emitter: &mut Emitter<'_, B>, vertices: usize) -> GenerateResult<()> {
    emitter.allocate_vertices(vertices)?;

    for i in 0..vertices {
        for j in (i + 1)..vertices {
            emitter.connect(i, j)?;
        }
    }
    Ok(())
}
