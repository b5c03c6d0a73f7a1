use super::*;
use crate::errors::{Error, InvariantCheck};
use crate::graph::weighted::{Neighborhood, fmt_weighted_edge_list};
use crate::graph::*;
use itertools::Itertools;
use std::fmt;

/// A working copy of a [`WeightedGraph`] whose vertices are super-vertices:
/// each one stands for the set of original vertices merged into it by
/// contraction. Freshly converted graphs start with singleton member sets.
///
/// Contraction is a pure transformation producing a brand-new graph, so
/// every phase of the driver reasons about an immutable snapshot.
#[derive(Clone)]
pub struct ContractedGraph {
    members: Vec<VertexSet>,
    adj: Vec<Neighborhood>,
    number_of_edges: NumEdges,
    total_weight: Weight,
}

impl GraphNodeOrder for ContractedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for ContractedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

impl WeightedAdjacency for ContractedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.adj[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].degree()
    }

    fn weighted_degree_of(&self, u: Node) -> Weight {
        self.adj[u as usize].weighted_degree()
    }
}

impl AdjacencyTest for ContractedGraph {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.adj[u as usize].weight_to(v)
    }
}

impl From<&WeightedGraph> for ContractedGraph {
    fn from(graph: &WeightedGraph) -> Self {
        let mut result = Self::with_members(
            graph
                .vertices()
                .map(|u| VertexSet::from_slice(&[u]))
                .collect(),
        );

        for WeightedEdge(u, v, w) in graph.unordered_edges() {
            result.accumulate_edge(u, v, w);
        }

        result
    }
}

impl ContractedGraph {
    fn with_members(members: Vec<VertexSet>) -> Self {
        let n = members.len();
        Self {
            members,
            adj: vec![Default::default(); n],
            number_of_edges: 0,
            total_weight: 0,
        }
    }

    /// Original vertices represented by super-vertex `u` (sorted).
    /// ** Panics if u >= n **
    pub fn members_of(&self, u: Node) -> &[Node] {
        &self.members[u as usize]
    }

    /// Merges `s` and `t` into a single super-vertex and returns the
    /// resulting graph; `self` stays untouched.
    ///
    /// The merged vertex sits in `s`'s slot and absorbs `t`'s member set;
    /// `t`'s slot disappears and all larger indices shift down by one, so
    /// relabeling is deterministic. Edges of `s` and `t` to a common
    /// neighbor are summed, the `{s, t}` edge itself vanishes: the total
    /// weight drops by exactly its weight.
    pub fn merge(&self, s: Node, t: Node) -> crate::errors::Result<Self> {
        if s == t || s >= self.number_of_nodes() || t >= self.number_of_nodes() {
            return Err(Error::invalid_vertex(s, t));
        }

        Ok(self.contract(s, t))
    }

    pub(crate) fn contract(&self, s: Node, t: Node) -> Self {
        debug_assert!(s != t && s < self.number_of_nodes() && t < self.number_of_nodes());

        let relabel = |u: Node| -> Node {
            let u = if u == t { s } else { u };
            u - (u > t) as Node
        };

        let mut members = Vec::with_capacity(self.len() - 1);
        for (u, m) in self.members.iter().enumerate() {
            if u as Node == t {
                continue;
            }

            if u as Node == s {
                members.push(
                    m.iter()
                        .chain(self.members[t as usize].iter())
                        .copied()
                        .sorted()
                        .collect(),
                );
            } else {
                members.push(m.clone());
            }
        }

        let mut result = Self::with_members(members);
        for WeightedEdge(u, v, w) in self.unordered_edges() {
            let (u, v) = (relabel(u), relabel(v));
            // the {s, t} edge maps onto a loop and is dropped
            if u != v {
                result.accumulate_edge(u, v, w);
            }
        }

        result
    }

    fn accumulate_edge(&mut self, u: Node, v: Node, w: Weight) {
        debug_assert!(u != v && w > 0);

        let created = self.adj[u as usize].add_weight(v, w);
        let _mirror = self.adj[v as usize].add_weight(u, w);
        debug_assert_eq!(created, _mirror);

        self.number_of_edges += created as NumEdges;
        self.total_weight += w;
    }
}

impl InvariantCheck<Error> for ContractedGraph {
    fn is_correct(&self) -> std::result::Result<(), Error> {
        let mut seen = fxhash::FxHashSet::default();
        for (u, m) in self.members.iter().enumerate() {
            let sorted_unique = m.windows(2).all(|w| w[0] < w[1]);
            if m.is_empty() || !sorted_unique || m.iter().any(|x| !seen.insert(*x)) {
                return Err(Error::invalid_vertex(u, u));
            }
        }

        for u in self.vertices() {
            for (v, w) in self.neighbors_of(u) {
                if u == v || w == 0 || self.edge_weight(v, u) != Some(w) {
                    return Err(Error::invalid_vertex(u, v));
                }
            }
        }

        assert_eq!(
            self.total_weight(),
            self.unordered_edges().map(|e| e.weight()).sum::<Weight>()
        );
        assert_eq!(
            self.number_of_edges(),
            self.unordered_edges().count() as NumEdges
        );

        Ok(())
    }
}

impl fmt::Debug for ContractedGraph {
    fmt_weighted_edge_list!();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;

    #[test]
    fn singleton_members_after_conversion() {
        let graph = WeightedGraph::from_edges(3, [(0, 1, 2), (1, 2, 5)]);
        let contracted = ContractedGraph::from(&graph);

        assert_eq!(contracted.number_of_nodes(), 3);
        assert_eq!(contracted.number_of_edges(), 2);
        assert_eq!(contracted.total_weight(), 7);
        assert_eq!(contracted.members_of(1), [1]);
        contracted.is_correct().unwrap();
    }

    #[test]
    fn merge_relabels_and_sums_parallel_edges() {
        // triangle with a pendant; merging the triangle edge {0, 2} must sum
        // the two resulting parallel edges towards 1
        let graph = WeightedGraph::from_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 3)]);
        let contracted = ContractedGraph::from(&graph);

        let merged = contracted.merge(0, 2).unwrap();
        merged.is_correct().unwrap();

        assert_eq!(merged.number_of_nodes(), 3);
        assert_eq!(merged.members_of(0), [0, 2]);
        assert_eq!(merged.members_of(1), [1]);
        assert_eq!(merged.members_of(2), [3]); // old vertex 3 shifted down

        assert_eq!(merged.edge_weight(0, 1), Some(3));
        assert_eq!(merged.edge_weight(0, 2), Some(3));
        assert_eq!(merged.edge_weight(1, 2), None);
        assert_eq!(merged.total_weight(), contracted.total_weight() - 4);
    }

    #[test]
    fn merge_conserves_weight() {
        for graph in connected_graph_stream(123, 8, 5).take(10) {
            let contracted = ContractedGraph::from(&graph);

            for s in contracted.vertices() {
                for t in contracted.vertices().filter(|&t| t != s) {
                    let merged = contracted.contract(s, t);

                    assert_eq!(merged.number_of_nodes(), contracted.number_of_nodes() - 1);
                    assert_eq!(
                        merged.total_weight(),
                        contracted.total_weight() - contracted.edge_weight(s, t).unwrap_or(0)
                    );
                    merged.is_correct().unwrap();
                }
            }
        }
    }

    #[test]
    fn merge_rejects_bad_arguments() {
        let contracted = ContractedGraph::from(&WeightedGraph::from_edges(2, [(0, 1)]));

        assert!(contracted.merge(0, 0).is_err());
        assert!(contracted.merge(0, 2).is_err());
        assert!(contracted.merge(5, 1).is_err());
        assert!(contracted.merge(0, 1).is_ok());
    }

    #[test]
    fn repeated_merges_track_membership() {
        let graph = WeightedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let contracted = ContractedGraph::from(&graph);

        let once = contracted.merge(1, 3).unwrap();
        assert_eq!(once.members_of(1), [1, 3]);

        let twice = once.merge(1, 2).unwrap();
        assert_eq!(twice.members_of(0), [0]);
        assert_eq!(twice.members_of(1), [1, 2, 3]);
        assert_eq!(twice.number_of_nodes(), 2);
        assert_eq!(twice.edge_weight(0, 1), Some(2));
        twice.is_correct().unwrap();
    }
}
