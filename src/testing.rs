use crate::graph::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;

pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Endless stream of connected random weighted graphs on `n` vertices,
/// produced by rejection sampling from `G(n, p)` with a density safely above
/// the connectivity threshold. Deterministic in `seed`.
pub fn connected_graph_stream(
    seed: u64,
    n: NumNodes,
    max_weight: Weight,
) -> impl Iterator<Item = WeightedGraph> {
    assert!(n >= 2);
    let mut rng = Pcg64::seed_from_u64(seed);
    let p = (3.0 * (n as f64).ln() / n as f64).min(0.95);

    std::iter::from_fn(move || {
        loop {
            let graph = WeightedGraph::random_weighted_gnp(&mut rng, n, p, max_weight);
            if graph.is_connected() {
                return Some(graph);
            }
        }
    })
}

/// The eight-vertex example graph of the Stoer-Wagner paper; its minimum cut
/// has weight 4 and separates vertices {3, 4, 7, 8} (ids {2, 3, 6, 7}).
pub fn textbook_graph() -> WeightedGraph {
    WeightedGraph::from_edges(
        8,
        [
            (0, 1, 2),
            (0, 4, 3),
            (1, 2, 3),
            (1, 4, 2),
            (1, 5, 2),
            (2, 3, 4),
            (2, 6, 2),
            (3, 6, 2),
            (3, 7, 2),
            (4, 5, 3),
            (5, 6, 1),
            (6, 7, 3),
        ],
    )
}
