use super::*;
use crate::errors::{Error, Result};
use crate::graph::*;
use itertools::Itertools;

/// Maps a cut found on a contracted graph back onto the original edge set.
///
/// Every cut edge connects two super-vertices; the expansion collects all
/// pairs between their member sets that exist as edges of `original`. The
/// matches of one cut edge must sum up to exactly the weight the contraction
/// recorded for it, otherwise the contraction bookkeeping was corrupted and
/// the expansion fails with [`Error::CutExpansionMismatch`]. The returned
/// edges are normalized and sorted.
pub fn expand(cut: &Cut, original: &WeightedGraph) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for cut_edge in cut.edges() {
        let mut found = 0;

        for (&u, &v) in cut_edge
            .left()
            .iter()
            .cartesian_product(cut_edge.right().iter())
        {
            if let Some(w) = original.edge_weight(u, v) {
                edges.push(Edge(u, v).normalized());
                found += w;
            }
        }

        if found != cut_edge.weight() {
            return Err(Error::CutExpansionMismatch {
                expected: cut_edge.weight(),
                found,
            });
        }
    }

    edges.sort_unstable();
    Ok(edges)
}
