use crate::graph::{NumNodes, Weight};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An edge or merge referenced an illegal vertex pair, e.g. a self-loop,
    /// an out-of-range node, or a zero weight delta.
    #[error("vertex pair ({a}, {b}) violates a graph precondition")]
    InvalidVertex { a: String, b: String },

    /// A minimum cut partitions the vertices into two nonempty sets, so the
    /// input needs at least two of them.
    #[error("graph has {0} vertices; a minimum cut needs at least 2")]
    GraphTooSmall(NumNodes),

    /// A disconnected input already falls apart without removing any edge.
    #[error("graph is disconnected")]
    Disconnected,

    /// Expanding a contracted cut edge did not recover the weight the
    /// contraction recorded for it. This means the contraction bookkeeping
    /// is corrupted and must be treated as fatal.
    #[error("cut expansion mismatch: contracted edge has weight {expected}, expansion found {found}")]
    CutExpansionMismatch { expected: Weight, found: Weight },
}

impl Error {
    pub fn invalid_vertex(a: impl ToString, b: impl ToString) -> Self {
        Self::InvalidVertex {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: std::error::Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}
