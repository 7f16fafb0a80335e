//! A module for working with undirected graphs.

use std::{fmt, ops::Index};

use nalgebra::DMatrix;

use crate::{
    element::{Accumulate, Element, Weight},
    error::{Error, Result},
    graph::DenseGraph,
};

/// An undirected graph, every write is mirrored so the adjacency matrix stays symmetric.
#[derive(Clone, Debug, PartialEq)]
pub struct UndirectedGraph<T: Element> {
    graph: DenseGraph<T>,
}

impl<T: Element> UndirectedGraph<T> {
    /// Creates an undirected graph with `size` vertices and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            graph: DenseGraph::new(size),
        }
    }

    /// Builds an undirected graph from a square, symmetric adjacency matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use amgraph::error::Error;
    /// use amgraph::undirected::UndirectedGraph;
    ///
    /// assert!(UndirectedGraph::from_matrix(dmatrix![0, 1; 1, 0]).is_ok());
    /// assert_eq!(
    ///     UndirectedGraph::from_matrix(dmatrix![0, 1; 0, 0]),
    ///     Err(Error::Asymmetric { row: 0, col: 1 })
    /// );
    /// ```
    pub fn from_matrix(matrix: DMatrix<T>) -> Result<Self> {
        let graph = DenseGraph::from_matrix(matrix)?;

        // Only the upper triangle needs to be compared against its mirror.
        let size = graph.size();
        for row in 0..size {
            for col in row + 1..size {
                if graph.get(row, col) != graph.get(col, row) {
                    return Err(Error::Asymmetric { row, col });
                }
            }
        }

        Ok(Self { graph })
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

    /// Sets the value of the edge between `i` and `j`, in both directions.
    ///
    /// Both indices are validated before anything is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::undirected::UndirectedGraph;
    ///
    /// let mut graph = UndirectedGraph::new(3);
    /// graph.set_edge(0, 2, 1.0).unwrap();
    ///
    /// assert_eq!(graph.get(0, 2), 1.0);
    /// assert_eq!(graph.get(2, 0), 1.0);
    /// ```
    pub fn set_edge(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        self.graph.check_bounds(i, j)?;

        let matrix = self.graph.matrix_mut();
        matrix[(i, j)] = value;
        matrix[(j, i)] = value;

        Ok(())
    }

    /// Returns the value of the edge between `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index isn't a vertex.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.graph.get(i, j)
    }

    /// Returns the value of the edge between `i` and `j`, or an out of bounds error.
    pub fn try_get(&self, i: usize, j: usize) -> Result<T> {
        self.graph.try_get(i, j)
    }

    /// Returns the degree of every vertex, in vertex order, treating the zero value as "no edge".
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::undirected::UndirectedGraph;
    ///
    /// let mut graph = UndirectedGraph::new(3);
    /// graph.set_edge(0, 1, 2).unwrap();
    /// graph.set_edge(0, 2, 5).unwrap();
    ///
    /// assert_eq!(graph.degree(), vec![2, 1, 1]);
    /// ```
    pub fn degree(&self) -> Vec<usize> {
        self.degree_with(T::default())
    }

    /// Returns the degree of every vertex, in vertex order: the number of cells in its row that
    /// differ from `no_edge`.
    ///
    /// This counts connections, it isn't a weighted sum.
    pub fn degree_with(&self, no_edge: T) -> Vec<usize> {
        self.graph
            .matrix()
            .row_iter()
            .map(|row| row.iter().filter(|&&cost| cost != no_edge).count())
            .collect()
    }

    /// Returns the adjacency matrix backing the graph, it is always symmetric.
    pub fn matrix(&self) -> &DMatrix<T> {
        self.graph.matrix()
    }
}

impl<T: Weight> UndirectedGraph<T> {
    /// Adds `value` to the edge between `i` and `j`, in both directions.
    ///
    /// A self-loop is a single cell and only receives `value` once. Fails with
    /// [`Error::Overflow`] if the sum doesn't fit the weight type, neither direction is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use amgraph::undirected::UndirectedGraph;
    ///
    /// let mut graph = UndirectedGraph::new(2);
    /// graph.add_to_edge(0, 1, 2).unwrap();
    /// graph.add_to_edge(1, 0, 3).unwrap();
    ///
    /// assert_eq!(graph.get(0, 1), 5);
    /// assert_eq!(graph.get(1, 0), 5);
    /// ```
    pub fn add_to_edge(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        self.graph.check_bounds(i, j)?;

        // The matrix is symmetric, so one sum covers both directions.
        let sum = self
            .graph
            .get(i, j)
            .accumulate(value)
            .ok_or(Error::Overflow { from: i, to: j })?;

        let matrix = self.graph.matrix_mut();
        matrix[(i, j)] = sum;
        matrix[(j, i)] = sum;

        Ok(())
    }
}

//
// Trait implementations
//

impl<T: Element> Default for UndirectedGraph<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element> AsRef<DenseGraph<T>> for UndirectedGraph<T> {
    fn as_ref(&self) -> &DenseGraph<T> {
        &self.graph
    }
}

impl<T: Element> From<UndirectedGraph<T>> for DenseGraph<T> {
    fn from(graph: UndirectedGraph<T>) -> Self {
        graph.graph
    }
}

impl<T: Element + fmt::Display> fmt::Display for UndirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}

impl<T: Element> Index<(usize, usize)> for UndirectedGraph<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.graph[index]
    }
}
