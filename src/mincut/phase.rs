use super::*;
use crate::graph::*;
use itertools::Itertools;
use std::cmp::Reverse;

impl ContractedGraph {
    /// Runs one Stoer-Wagner phase: grows a vertex set from the seed by
    /// maximum adjacency until every vertex is ordered, then reports the cut
    /// isolating the last-added vertex `t` and the graph with the final two
    /// vertices `s` and `t` merged. Returns `None` as successor when the
    /// phase ran on two vertices, i.e. no further contraction is possible.
    ///
    /// The ordering is part of the contract: the growing set is seeded with
    /// vertex 0 and each step picks the outside vertex with the largest
    /// total edge weight into the set, ties broken towards the smaller
    /// index. The cut-of-the-phase is a minimum s-t cut of this graph, so
    /// the lightest one over all phases is a global minimum cut.
    ///
    /// ** Panics if the graph has fewer than two vertices **
    pub fn minimum_cut_phase(&self) -> (Cut, Option<ContractedGraph>) {
        let n = self.number_of_nodes();
        assert!(n >= 2);

        let mut in_set = vec![false; n as usize];
        let mut connectedness: Vec<Weight> = vec![0; n as usize];

        in_set[0] = true;
        for (v, w) in self.neighbors_of(0) {
            connectedness[v as usize] += w;
        }

        // the last two vertices of the maximum-adjacency order
        let (mut s, mut t) = (0, 0);

        for _ in 1..n {
            let next = self
                .vertices()
                .filter(|&u| !in_set[u as usize])
                .max_by_key(|&u| (connectedness[u as usize], Reverse(u)))
                .unwrap();

            in_set[next as usize] = true;
            (s, t) = (t, next);

            for (v, w) in self.neighbors_of(next) {
                if !in_set[v as usize] {
                    connectedness[v as usize] += w;
                }
            }
        }

        let edges = self
            .neighbors_of(t)
            .map(|(v, w)| CutEdge {
                left: self.members_of(t).into(),
                right: self.members_of(v).into(),
                weight: w,
            })
            .collect_vec();

        let cut = Cut {
            weight: edges.iter().map(|e| e.weight).sum(),
            isolated: self.members_of(t).into(),
            edges,
        };

        // t is connected to every other vertex that remains, so its final
        // connectedness is exactly the weight of the cut isolating it
        debug_assert_eq!(cut.weight, connectedness[t as usize]);
        debug_assert_eq!(cut.weight, self.weighted_degree_of(t));

        let contracted = (n > 2).then(|| self.contract(s, t));
        (cut, contracted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::InvariantCheck;
    use crate::testing::*;

    #[test]
    fn terminal_phase_returns_the_connecting_edge() {
        let graph = WeightedGraph::from_edges(2, [(0, 1, 9)]);
        let (cut, contracted) = ContractedGraph::from(&graph).minimum_cut_phase();

        assert!(contracted.is_none());
        assert_eq!(cut.weight(), 9);
        assert_eq!(cut.edges().len(), 1);
        assert_eq!(cut.edges()[0].left(), [1]);
        assert_eq!(cut.edges()[0].right(), [0]);
        assert_eq!(cut.isolated(), [1]);
    }

    #[test]
    fn phase_on_a_path_isolates_an_endpoint() {
        // path 0-1-2 with a heavy first edge: the order is 0, 1, 2, so the
        // phase isolates vertex 2 and merges it into 1
        let graph = WeightedGraph::from_edges(3, [(0, 1, 5), (1, 2, 1)]);
        let (cut, contracted) = ContractedGraph::from(&graph).minimum_cut_phase();

        assert_eq!(cut.weight(), 1);
        assert_eq!(cut.isolated(), [2]);

        let contracted = contracted.unwrap();
        assert_eq!(contracted.number_of_nodes(), 2);
        assert_eq!(contracted.members_of(1), [1, 2]);
        assert_eq!(contracted.edge_weight(0, 1), Some(5));
    }

    #[test]
    fn ties_break_towards_the_smaller_index() {
        // star around 0 with equal spokes: vertices join in index order and
        // the phase isolates the largest index
        let graph = WeightedGraph::from_edges(4, [(0, 1, 2), (0, 2, 2), (0, 3, 2)]);
        let (cut, _) = ContractedGraph::from(&graph).minimum_cut_phase();

        assert_eq!(cut.isolated(), [3]);
        assert_eq!(cut.weight(), 2);
    }

    #[test]
    fn phases_never_produce_loops() {
        for graph in connected_graph_stream(0xCAFE, 9, 3).take(5) {
            let mut current = ContractedGraph::from(&graph);

            loop {
                current.is_correct().unwrap();
                assert!(current.unordered_edges().all(|e| !e.is_loop()));

                let (_, contracted) = current.minimum_cut_phase();
                match contracted {
                    Some(next) => current = next,
                    None => break,
                }
            }
        }
    }
}
