//! Tadpole graph T(m, n)
//!
//! A cycle on the first `m` vertices with a pendant path of `n` vertices
//! hanging off vertex `m - 1`. Built as one path over all `m + n` vertices
//! in creation order, then closed by the edge `(m - 1) -> 0`.

use super::emit::Emitter;
use super::error::GenerateResult;
use crate::backend::GraphBackend;

pub fn emit<B: GraphBackend + ?Sized>(
    emitter: &mut Emitter<'_, B>,
    cycle_size: usize,
    path_size: usize,
) -> GenerateResult<()> {
    let total = cycle_size + path_size;
    emitter.allocate_vertices(total)?;

    for i in 1..total {
        emitter.link(i - 1, i)?;
    }
    emitter.link(cycle_size - 1, 0)?;
    Ok(())
}
