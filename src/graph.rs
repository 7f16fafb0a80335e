//! A module for working with dense graphs.

use std::{fmt, ops::Index};

use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::{
    element::Element,
    error::{Error, Result},
};

/// A graph over a fixed number of vertices, backed by a dense square adjacency matrix.
///
/// Each row holds the connections from a vertex and each column the connections to a vertex.
/// Writes made through [`set_edge`](Self::set_edge) have directed semantics, see
/// [`UndirectedGraph`](crate::undirected::UndirectedGraph) for symmetric writes.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGraph<T: Element> {
    matrix: DMatrix<T>,
}

impl<T: Element> DenseGraph<T> {
    /// Creates a graph with `size` vertices and no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::graph::DenseGraph;
    ///
    /// let graph: DenseGraph<u32> = DenseGraph::new(3);
    ///
    /// assert_eq!(graph.size(), 3);
    /// assert_eq!(graph.get(2, 1), 0);
    /// ```
    pub fn new(size: usize) -> Self {
        Self {
            matrix: Self::no_edges(size),
        }
    }

    /// Builds a graph from an existing adjacency matrix, which must be square.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use amgraph::graph::DenseGraph;
    ///
    /// let graph = DenseGraph::from_matrix(dmatrix![0, 2; 0, 0]).unwrap();
    /// assert_eq!(graph.get(0, 1), 2);
    ///
    /// assert!(DenseGraph::from_matrix(dmatrix![0, 2, 1; 0, 0, 1]).is_err());
    /// ```
    pub fn from_matrix(matrix: DMatrix<T>) -> Result<Self> {
        if !matrix.is_square() {
            return Err(Error::NotSquare {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }

        Ok(Self { matrix })
    }

    /// Returns the vertex count of the graph.
    pub fn size(&self) -> usize {
        // The matrix is always square.
        self.matrix.nrows()
    }

    /// Returns whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Resizes the graph to `size` vertices.
    ///
    /// Every edge is discarded, including those between vertices that survive the resize.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::graph::DenseGraph;
    ///
    /// let mut graph = DenseGraph::new(2);
    /// graph.set_edge(0, 1, 7).unwrap();
    ///
    /// graph.resize(3);
    /// assert_eq!(graph.size(), 3);
    /// assert_eq!(graph.get(0, 1), 0);
    /// ```
    pub fn resize(&mut self, size: usize) {
        trace!(from = self.size(), to = size, "resizing graph");

        self.matrix = Self::no_edges(size);
    }

    /// Sets the value of the `from -> to` edge.
    ///
    /// Fails with [`Error::OutOfBounds`] if either index isn't a vertex, the graph is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::graph::DenseGraph;
    ///
    /// let mut graph = DenseGraph::new(2);
    /// graph.set_edge(0, 1, 1.5).unwrap();
    ///
    /// assert_eq!(graph.get(0, 1), 1.5);
    /// assert_eq!(graph.get(1, 0), 0.0);
    /// assert!(graph.set_edge(2, 0, 1.0).is_err());
    /// ```
    pub fn set_edge(&mut self, from: usize, to: usize, value: T) -> Result<()> {
        self.check_bounds(from, to)?;
        self.matrix[(from, to)] = value;

        Ok(())
    }

    /// Returns the value of the `from -> to` edge.
    ///
    /// This is the hot-path read: checking the indices is left to the caller.
    ///
    /// # Panics
    ///
    /// Panics if either index isn't a vertex, use [`try_get`](Self::try_get) for a checked read.
    pub fn get(&self, from: usize, to: usize) -> T {
        self.matrix[(from, to)]
    }

    /// Returns the value of the `from -> to` edge, or [`Error::OutOfBounds`].
    pub fn try_get(&self, from: usize, to: usize) -> Result<T> {
        self.check_bounds(from, to)?;

        Ok(self.matrix[(from, to)])
    }

    /// Returns the adjacency matrix backing the graph.
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Consumes the graph, returning its adjacency matrix.
    pub fn into_matrix(self) -> DMatrix<T> {
        self.matrix
    }

    //
    // Crate
    //

    /// Wraps a matrix known to be square.
    pub(crate) fn from_square(matrix: DMatrix<T>) -> Self {
        debug_assert!(matrix.is_square());

        Self { matrix }
    }

    pub(crate) fn matrix_mut(&mut self) -> &mut DMatrix<T> {
        &mut self.matrix
    }

    /// Checks both indices address a vertex.
    pub(crate) fn check_bounds(&self, from: usize, to: usize) -> Result<()> {
        let size = self.size();

        if from < size && to < size {
            return Ok(());
        }

        debug!(from, to, size, "rejected out of bounds edge");

        Err(Error::OutOfBounds { from, to, size })
    }

    //
    // Private
    //

    fn no_edges(size: usize) -> DMatrix<T> {
        DMatrix::from_element(size, size, T::default())
    }
}

//
// Trait implementations
//

impl<T: Element> Default for DenseGraph<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element> AsRef<DenseGraph<T>> for DenseGraph<T> {
    fn as_ref(&self) -> &DenseGraph<T> {
        self
    }
}

impl<T: Element> Index<(usize, usize)> for DenseGraph<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.matrix[index]
    }
}

/// Renders the graph as a table, rows are the source vertices and columns the targets.
impl<T: Element + fmt::Display> fmt::Display for DenseGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let rule = "-------".repeat(size.max(1));

        writeln!(f, "{rule}")?;
        write!(f, "|  v  |")?;
        for j in 0..size {
            write!(f, "  {j}  |")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;

        for (i, row) in self.matrix.row_iter().enumerate() {
            write!(f, "|  {i}  |")?;
            for value in row.iter() {
                write!(f, "  {value}  |")?;
            }
            writeln!(f)?;
        }

        write!(f, "{rule}")
    }
}
