use super::*;
use fxhash::FxHashSet;
use std::collections::VecDeque;

pub trait Traversal: WeightedAdjacency {
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }
}

impl<G: WeightedAdjacency> Traversal for G {}

/// Breadth-first traversal, restartable to sweep all connected components.
/// A set of suppressed edges may be installed to traverse the graph as if
/// those edges were removed.
pub struct Bfs<'a, G> {
    graph: &'a G,
    queue: VecDeque<Node>,
    visited: Vec<bool>,
    suppressed: FxHashSet<Edge>,
}

impl<'a, G: WeightedAdjacency> Bfs<'a, G> {
    /// ** Panics if start >= n **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;

        Self {
            graph,
            queue: VecDeque::from(vec![start]),
            visited,
            suppressed: Default::default(),
        }
    }

    /// Traverses the graph as if `edges` were deleted
    pub fn suppress_edges(mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        self.suppressed
            .extend(edges.into_iter().map(|e| e.into().normalized()));
        self
    }

    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Seeds the exhausted traversal with the smallest unvisited node;
    /// returns *false* if every node was visited.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());

        match self.visited.iter().position(|&v| !v) {
            Some(u) => {
                self.visited[u] = true;
                self.queue.push_back(u as Node);
                true
            }
            None => false,
        }
    }

    fn is_suppressed(&self, u: Node, v: Node) -> bool {
        !self.suppressed.is_empty() && self.suppressed.contains(&Edge(u, v).normalized())
    }
}

impl<G: WeightedAdjacency> Iterator for Bfs<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for (v, _) in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] && !self.is_suppressed(u, v) {
                self.visited[v as usize] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn visits_component_of_start() {
        let graph = WeightedGraph::from_edges(6, [(0, 1), (1, 2), (0, 2), (4, 5)]);

        let visited = graph.bfs(0).sorted().collect_vec();
        assert_eq!(visited, [0, 1, 2]);
    }

    #[test]
    fn restart_sweeps_remaining_components() {
        let graph = WeightedGraph::from_edges(5, [(0, 1), (3, 4)]);
        let mut bfs = graph.bfs(0);

        assert_eq!(bfs.by_ref().sorted().collect_vec(), [0, 1]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), [2]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().sorted().collect_vec(), [3, 4]);

        assert!(!bfs.try_restart_at_unvisited());
        assert!(bfs.did_visit_node(4));
    }

    #[test]
    fn suppressed_edges_split_the_graph() {
        let graph = WeightedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        let reached = graph
            .bfs(0)
            .suppress_edges([(1, 2), (0, 3)])
            .sorted()
            .collect_vec();
        assert_eq!(reached, [0, 1]);
    }
}
