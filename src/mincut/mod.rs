pub mod contracted;
pub mod expand;
pub mod naive;
pub mod phase;

use crate::errors::{Error, Result};
use crate::graph::*;
use log::debug;
use smallvec::SmallVec;

pub use contracted::ContractedGraph;
pub use expand::expand;
pub use naive::brute_force_minimum_cut;

/// The original vertices absorbed into one contracted vertex; kept sorted
pub type VertexSet = SmallVec<[Node; 4]>;

/// One edge of a cut discovered on a contracted graph. Its endpoints are
/// given as the member sets of the two super-vertices it connects; `weight`
/// is the contracted edge weight, i.e. the sum of all original edges
/// running between the two member sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutEdge {
    left: VertexSet,
    right: VertexSet,
    weight: Weight,
}

impl CutEdge {
    pub fn left(&self) -> &[Node] {
        &self.left
    }

    pub fn right(&self) -> &[Node] {
        &self.right
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// A partition boundary: the edges crossing it and their total weight.
///
/// `isolated` holds the original vertices on the lone side of the partition;
/// the other side is the rest of the graph. The edge endpoints still refer
/// to contracted member sets, use [`expand`] to translate them back into
/// edges of the input graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cut {
    edges: Vec<CutEdge>,
    weight: Weight,
    isolated: VertexSet,
}

impl Cut {
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn edges(&self) -> &[CutEdge] {
        &self.edges
    }

    /// Original vertices isolated by this cut (sorted)
    pub fn isolated(&self) -> &[Node] {
        &self.isolated
    }
}

/// Computes a global minimum cut of `graph` with the Stoer-Wagner algorithm:
/// `|V| - 1` maximum-adjacency phases on successively contracted graphs, of
/// which the lightest cut-of-a-phase wins.
///
/// The run is deterministic: every phase seeds its growing set with vertex 0
/// and breaks connectedness ties towards the smaller vertex index, and
/// contraction relabels vertices in a fixed way. Repeated invocations on the
/// same graph therefore return the same cut, not merely the same weight.
///
/// Errors with [`Error::GraphTooSmall`] for graphs with fewer than two
/// vertices and with [`Error::Disconnected`] for disconnected inputs (whose
/// minimum cut degenerates to an empty edge set).
pub fn minimum_cut(graph: &WeightedGraph) -> Result<Cut> {
    if graph.number_of_nodes() < 2 {
        return Err(Error::GraphTooSmall(graph.number_of_nodes()));
    }

    if !graph.is_connected() {
        return Err(Error::Disconnected);
    }

    let mut current = ContractedGraph::from(graph);
    let mut best: Option<Cut> = None;

    loop {
        let (cut, contracted) = current.minimum_cut_phase();
        debug!(
            "cut of the phase on {} vertices: weight {}",
            current.number_of_nodes(),
            cut.weight()
        );

        if best.as_ref().map_or(true, |b| cut.weight() < b.weight()) {
            best = Some(cut);
        }

        match contracted {
            Some(next) => current = next,
            None => break,
        }
    }

    // the terminal phase always ran, so a candidate exists
    Ok(best.unwrap())
}
