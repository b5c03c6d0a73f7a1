use super::*;
use crate::errors::{Error, InvariantCheck};
use std::fmt;

/// Undirected weighted graph over dense node indices `0..n`.
///
/// Parallel edge insertions are pre-merged: adding a weight to an existing
/// pair accumulates into the single stored edge, so there is at most one
/// weight entry per unordered pair and every stored weight is positive.
#[derive(Clone, Default)]
pub struct WeightedGraph {
    adj: Vec<Neighborhood>,
    number_of_edges: NumEdges,
    total_weight: Weight,
}

macro_rules! forward {
    ($single : ident, $internal : ident, $type : ty) => {
        fn $single(&self, node: Node) -> $type {
            self.adj[node as usize].$internal()
        }
    };
}

/// Debug output as a compact weighted edge list; shared with the contracted
/// graph, whose Debug additionally prints its member sets.
macro_rules! fmt_weighted_edge_list {
    () => {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "n={} m={} [",
                self.number_of_nodes(),
                self.number_of_edges()
            )?;
            for (i, WeightedEdge(u, v, w)) in self.unordered_edges().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{u}-{v}:{w}")?;
            }
            f.write_str("]")
        }
    };
}

pub(crate) use fmt_weighted_edge_list;

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

impl WeightedAdjacency for WeightedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[u as usize].neighbors()
    }

    forward!(degree_of, degree, NumNodes);
    forward!(weighted_degree_of, weighted_degree, Weight);
}

impl AdjacencyTest for WeightedGraph {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.adj[u as usize].weight_to(v)
    }
}

impl GraphNew for WeightedGraph {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
            total_weight: 0,
        }
    }
}

impl GraphEdgeEditing for WeightedGraph {
    fn add_edge(&mut self, u: Node, v: Node, delta: Weight) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        assert!(delta > 0, "edge weights are strictly positive");
        assert!((u as usize) < self.adj.len() && (v as usize) < self.adj.len());

        let created = self.adj[u as usize].add_weight(v, delta);
        let _mirror = self.adj[v as usize].add_weight(u, delta);
        debug_assert_eq!(created, _mirror);

        self.number_of_edges += created as NumEdges;
        self.total_weight += delta;
        created
    }
}

impl WeightedGraph {
    /// Builds a graph with `n` nodes from weighted edges; duplicates accumulate.
    pub fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    /// Infers the node count from the largest endpoint mentioned.
    pub fn test_only_from(edges: impl Clone + IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| e.into())
            .map(|e| e.0.max(e.1) + 1)
            .max()
            .unwrap_or(0);

        Self::from_edges(n, edges)
    }
}

impl InvariantCheck<Error> for WeightedGraph {
    fn is_correct(&self) -> Result<(), Error> {
        let mut edges = 0;
        let mut twice_weight = 0;

        for u in self.vertices() {
            for (v, w) in self.neighbors_of(u) {
                if u == v || w == 0 || self.edge_weight(v, u) != Some(w) {
                    return Err(Error::invalid_vertex(u, v));
                }
                edges += 1;
                twice_weight += w;
            }
        }

        // this is a checker, keep it plain stupid
        assert_eq!(edges, 2 * self.number_of_edges);
        assert_eq!(twice_weight, 2 * self.total_weight);

        Ok(())
    }
}

impl fmt::Debug for WeightedGraph {
    fmt_weighted_edge_list!();
}

/// Neighbor lookups are linear scans, which is fine for the engine's
/// O(n^2)-per-phase bookkeeping on the graph sizes it targets.
#[derive(Default, Clone)]
pub(crate) struct Neighborhood {
    nodes: Vec<(Node, Weight)>,
}

impl Neighborhood {
    pub(crate) fn degree(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    pub(crate) fn weighted_degree(&self) -> Weight {
        self.nodes.iter().map(|&(_, w)| w).sum()
    }

    pub(crate) fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nodes.iter().copied()
    }

    pub(crate) fn weight_to(&self, v: Node) -> Option<Weight> {
        self.nodes.iter().find(|&&(u, _)| u == v).map(|&(_, w)| w)
    }

    /// Returns *true* exactly if `v` was not a neighbor before
    pub(crate) fn add_weight(&mut self, v: Node, delta: Weight) -> bool {
        if let Some(entry) = self.nodes.iter_mut().find(|(u, _)| *u == v) {
            entry.1 += delta;
            false
        } else {
            self.nodes.push((v, delta));
            true
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn new() {
        for n in 1..50 {
            let graph = WeightedGraph::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.total_weight(), 0);
            assert_eq!(graph.number_of_nodes(), n);

            assert_eq!(graph.vertices_range().len(), n as usize);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn add_edge_accumulates() {
        let mut graph = WeightedGraph::new(3);

        assert!(graph.add_edge(0, 1, 2));
        assert!(!graph.add_edge(1, 0, 3));
        assert!(graph.add_edge(1, 2, 1));

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.total_weight(), 6);
        assert_eq!(graph.edge_weight(0, 1), Some(5));
        assert_eq!(graph.edge_weight(1, 0), Some(5));
        assert_eq!(graph.edge_weight(0, 2), None);
        assert_eq!(graph.weighted_degree_of(1), 6);
        assert_eq!(graph.degrees().collect_vec(), [1, 2, 1]);
        assert_eq!(graph.weighted_degrees().collect_vec(), [5, 6, 1]);

        graph.is_correct().unwrap();
    }

    #[test]
    fn unordered_edges_are_normalized() {
        let graph = WeightedGraph::from_edges(4, [(2, 0, 4), (3, 1, 1), (1, 2, 2)]);

        let edges = graph.unordered_edges().sorted().collect_vec();
        assert_eq!(
            edges,
            [
                WeightedEdge(0, 2, 4),
                WeightedEdge(1, 2, 2),
                WeightedEdge(1, 3, 1)
            ]
        );
        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
    }

    #[test]
    #[should_panic]
    fn rejects_self_loop() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(1, 1, 1);
    }

    #[test]
    #[should_panic]
    fn rejects_zero_delta() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, 0);
    }

    #[test]
    fn test_only_from_infers_size() {
        let graph = WeightedGraph::test_only_from([(0, 4), (1, 2)]);
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.total_weight(), 2);
    }
}
