//! A module for working with directed graphs.

use std::{fmt, ops::Index};

use nalgebra::DMatrix;

use crate::{
    element::{Accumulate, Element, Weight},
    error::{Error, Result},
    graph::DenseGraph,
};

/// A directed graph: the `from -> to` and `to -> from` edges are independent and self-loops are
/// allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectedGraph<T: Element> {
    graph: DenseGraph<T>,
}

impl<T: Element> DirectedGraph<T> {
    /// Creates a directed graph with `size` vertices and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            graph: DenseGraph::new(size),
        }
    }

    /// Builds a directed graph from a square adjacency matrix.
    pub fn from_matrix(matrix: DMatrix<T>) -> Result<Self> {
        DenseGraph::from_matrix(matrix).map(|graph| Self { graph })
    }

    /// Returns the vertex count of the graph.
    pub fn size(&self) -> usize {
        self.graph.size()
    }

    /// Returns whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Resizes the graph to `size` vertices, discarding every edge.
    pub fn resize(&mut self, size: usize) {
        self.graph.resize(size)
    }

    /// Sets the value of the `from -> to` edge, leaving `to -> from` untouched.
    pub fn set_edge(&mut self, from: usize, to: usize, value: T) -> Result<()> {
        self.graph.set_edge(from, to, value)
    }

    /// Returns the value of the `from -> to` edge.
    ///
    /// # Panics
    ///
    /// Panics if either index isn't a vertex.
    pub fn get(&self, from: usize, to: usize) -> T {
        self.graph.get(from, to)
    }

    /// Returns the value of the `from -> to` edge, or an out of bounds error.
    pub fn try_get(&self, from: usize, to: usize) -> Result<T> {
        self.graph.try_get(from, to)
    }

    /// Returns a mutable reference to the `from -> to` cell.
    ///
    /// This is the escape hatch for inner loops that have already validated their indices: no
    /// `Result` is involved and the only check left is the matrix's own indexing.
    ///
    /// # Panics
    ///
    /// Panics if either index isn't a vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::directed::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new(2);
    /// *graph.cell_mut(0, 1) = 3;
    /// *graph.cell_mut(0, 1) *= 2;
    ///
    /// assert_eq!(graph.get(0, 1), 6);
    /// ```
    pub fn cell_mut(&mut self, from: usize, to: usize) -> &mut T {
        &mut self.graph.matrix_mut()[(from, to)]
    }

    /// Returns a mutable reference to the `from -> to` cell without any bounds check.
    ///
    /// # Safety
    ///
    /// Both `from` and `to` must be smaller than [`size`](Self::size).
    pub unsafe fn cell_unchecked_mut(&mut self, from: usize, to: usize) -> &mut T {
        self.graph.matrix_mut().get_unchecked_mut((from, to))
    }

    /// Returns the adjacency matrix backing the graph.
    pub fn matrix(&self) -> &DMatrix<T> {
        self.graph.matrix()
    }
}

impl<T: Weight> DirectedGraph<T> {
    /// Adds `value` to the `from -> to` edge only.
    ///
    /// Fails with [`Error::Overflow`] if the sum doesn't fit the weight type, the edge is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::directed::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new(3);
    /// graph.set_edge(0, 1, 4).unwrap();
    /// graph.add_to_edge(0, 1, 1).unwrap();
    ///
    /// assert_eq!(graph.get(0, 1), 5);
    /// assert_eq!(graph.get(1, 0), 0);
    /// ```
    pub fn add_to_edge(&mut self, from: usize, to: usize, value: T) -> Result<()> {
        self.graph.check_bounds(from, to)?;

        let sum = self
            .graph
            .get(from, to)
            .accumulate(value)
            .ok_or(Error::Overflow { from, to })?;
        self.graph.matrix_mut()[(from, to)] = sum;

        Ok(())
    }
}

//
// Trait implementations
//

impl<T: Element> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element> AsRef<DenseGraph<T>> for DirectedGraph<T> {
    fn as_ref(&self) -> &DenseGraph<T> {
        &self.graph
    }
}

impl<T: Element> From<DirectedGraph<T>> for DenseGraph<T> {
    fn from(graph: DirectedGraph<T>) -> Self {
        graph.graph
    }
}

impl<T: Element + fmt::Display> fmt::Display for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}

impl<T: Element> Index<(usize, usize)> for DirectedGraph<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.graph[index]
    }
}
