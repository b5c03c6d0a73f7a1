pub mod builder;
pub mod connectivity;
pub mod edge;
pub mod gnp;
pub mod partition;
pub mod traversal;
pub mod weighted;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

/// Edge weights are strictly positive; sums over all edges of a graph are
/// still expected to fit into `Weight`.
pub type Weight = u64;

use std::ops::Range;

pub use builder::*;
pub use connectivity::*;
pub use edge::*;
pub use gnp::*;
pub use partition::*;
pub use traversal::*;
pub use weighted::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    ///
    /// In contrast to `self.vertices()`, the range returned here does not
    /// borrow self and hence may be used where additional mutable references
    /// of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Weight;
}

#[macro_export]
macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Adjacency with per-edge weights. All graphs in this crate are undirected
/// and loop-free: `(v, w)` appears in `neighbors_of(u)` exactly if `(u, w)`
/// appears in `neighbors_of(v)`.
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of `u` together with the
    /// weight of the connecting edge.
    /// ** Panics if u >= n **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the total weight of all edges incident to `u`
    fn weighted_degree_of(&self, u: Node) -> Weight {
        self.neighbors_of(u).map(|(_, w)| w).sum()
    }

    node_iterator!(degrees, degree_of, NumNodes);
    node_iterator!(weighted_degrees, weighted_degree_of, Weight);

    /// Returns an iterator over each undirected edge exactly once, in
    /// normalized form.
    fn unordered_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| WeightedEdge(u, v, w))
        })
    }
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the undirected edge {u, v}
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Returns the weight of the undirected edge {u, v}, if present
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges; repeated insertions of the same
/// unordered pair accumulate their weights into a single edge.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds `delta` to the weight of the undirected edge {u, v}, creating
    /// the edge if it was absent. Returns *true* exactly if the edge was not
    /// present previously.
    /// ** Panics if u == v, if an endpoint is out of range, or if delta == 0 **
    fn add_edge(&mut self, u: Node, v: Node, delta: Weight) -> bool;

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}
