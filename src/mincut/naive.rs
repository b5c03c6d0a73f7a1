use crate::errors::{Error, Result};
use crate::graph::*;

/// Exhaustive reference: enumerates every nontrivial bipartition of the
/// vertices (vertex 0 pinned to one side, `2^(n-1) - 1` candidates) and
/// returns the minimum crossing weight. Used to validate the phase-based
/// engine on tiny graphs.
///
/// ** Panics if the graph has more than 24 vertices **
pub fn brute_force_minimum_cut(graph: &WeightedGraph) -> Result<Weight> {
    let n = graph.number_of_nodes();
    if n < 2 {
        return Err(Error::GraphTooSmall(n));
    }
    assert!(n <= 24, "bipartition enumeration is exponential in n");

    let mut best = Weight::MAX;

    for mask in 1u32..(1 << (n - 1)) {
        // vertex 0 stays on side zero; bit i of mask moves vertex i+1 over
        let side = |u: Node| u != 0 && (mask >> (u - 1)) & 1 == 1;

        let crossing = graph
            .unordered_edges()
            .filter(|&WeightedEdge(u, v, _)| side(u) != side(v))
            .map(|e| e.weight())
            .sum();

        best = best.min(crossing);
    }

    Ok(best)
}
