//! Error types shared by the graph and vector modules.

/// Errors returned by checked graph accessors, transforms and vector helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An edge index is not a vertex of the graph.
    #[error("graph of size {size} can't address connection {from}->{to}")]
    OutOfBounds { from: usize, to: usize, size: usize },

    /// A transform was requested on a graph with no vertices.
    #[error("empty graph")]
    EmptyGraph,

    /// Every value is equal, so max-min scaling would divide by zero.
    #[error("degenerate range: all values are equal")]
    DegenerateRange,

    /// A cell holds NaN or an infinity, which can't be rescaled.
    #[error("non-finite value at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    /// Accumulating into the `from -> to` edge would overflow the weight type.
    #[error("adding to connection {from}->{to} overflows")]
    Overflow { from: usize, to: usize },

    /// The matrix used to build a graph isn't square.
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The matrix used to build an undirected graph isn't symmetric.
    #[error("adjacency matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    /// A vector operation needs at least one element.
    #[error("empty vector")]
    EmptyVector,

    /// Sum-to-one normalization of values summing to zero.
    #[error("values sum to zero")]
    ZeroSum,

    /// A vector element is NaN or an infinity.
    #[error("non-finite value at index {index}")]
    NonFiniteElement { index: usize },

    /// Two vectors were expected to have the same length.
    #[error("vector lengths differ: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Result type for graph and vector operations.
pub type Result<T> = std::result::Result<T, Error>;
