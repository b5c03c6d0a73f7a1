use super::*;

pub trait Connectivity {
    /// Assigns each node the class of its connected component
    fn partition_into_connected_components(&self) -> Partition;

    /// Connected components of the graph with `removed` edges taken out.
    /// This is the classic post-processing step after a cut: remove its
    /// edges and measure the two remaining components.
    fn partition_without_edges(&self, removed: &[Edge]) -> Partition;

    fn is_connected(&self) -> bool;
}

impl<G> Connectivity for G
where
    G: WeightedAdjacency,
{
    fn partition_into_connected_components(&self) -> Partition {
        self.partition_without_edges(&[])
    }

    fn partition_without_edges(&self, removed: &[Edge]) -> Partition {
        let mut partition = Partition::new(self.number_of_nodes());
        if self.is_empty() {
            return partition;
        }

        let mut bfs = self.bfs(0).suppress_edges(removed.iter().copied());

        loop {
            let class = partition.add_class([]);

            for u in bfs.by_ref() {
                partition.move_node(u, class);
            }

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        partition
    }

    fn is_connected(&self) -> bool {
        !self.is_empty() && self.bfs(0).count() == self.len()
    }
}
