use super::*;
use rand::Rng;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Renyi) graph: each
    /// of the `n(n-1)/2` possible edges exists independently with
    /// probability `p`, carrying a weight drawn uniformly from
    /// `1..=max_weight`.
    fn random_weighted_gnp<R: Rng>(rng: &mut R, n: Node, p: f64, max_weight: Weight) -> Self;

    fn random_unit_gnp<R: Rng>(rng: &mut R, n: Node, p: f64) -> Self {
        Self::random_weighted_gnp(rng, n, p, 1)
    }
}

impl<G> GnpGenerator for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_weighted_gnp<R: Rng>(rng: &mut R, n: Node, p: f64, max_weight: Weight) -> Self {
        debug_assert!((0.0..=1.0).contains(&p));
        debug_assert!(max_weight > 0);

        let mut result = Self::new(n);

        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    result.add_edge(u, v, rng.gen_range(1..=max_weight));
                }
            }
        }

        result
    }
}
