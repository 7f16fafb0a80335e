//! Transforms producing a new graph from the edge values of an existing one.
//!
//! Both transforms accept any graph type ([`DenseGraph`], [`DirectedGraph`] or
//! [`UndirectedGraph`]) and return an independently owned [`DenseGraph`] of the same size.
//!
//! [`DirectedGraph`]: crate::directed::DirectedGraph
//! [`UndirectedGraph`]: crate::undirected::UndirectedGraph

use tracing::debug;

use crate::{
    element::{Element, Weight},
    error::{Error, Result},
    graph::DenseGraph,
};

/// Rescales every edge value into `[0, 1]` using the global minimum and maximum of the matrix.
///
/// Each output cell is `(value - min) / (max - min)`, so the cells holding the maximum map to
/// `1.0` and those holding the minimum to `0.0`. The "no edge" cells take part in the scan like
/// any other value.
///
/// Fails with [`Error::EmptyGraph`] for a graph with no vertices, with [`Error::NonFinite`] at the
/// first cell (in row order) holding NaN or an infinity, and with [`Error::DegenerateRange`] when
/// every cell holds the same value.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use amgraph::directed::DirectedGraph;
/// use amgraph::transform::normalize;
///
/// let mut graph = DirectedGraph::new(2);
/// graph.set_edge(0, 1, 4).unwrap();
/// graph.set_edge(1, 0, 2).unwrap();
///
/// assert_eq!(
///     normalize(&graph).unwrap().into_matrix(),
///     dmatrix![0.0, 1.0;
///              0.5, 0.0]
/// );
/// ```
pub fn normalize<T, G>(graph: &G) -> Result<DenseGraph<f64>>
where
    T: Weight,
    G: AsRef<DenseGraph<T>>,
{
    let graph = graph.as_ref();

    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }

    // Seed the scan from the first cell rather than the type's limits.
    let seed = graph.get(0, 0);
    let (mut min, mut max) = (seed, seed);

    for row in 0..graph.size() {
        for col in 0..graph.size() {
            let value = graph.get(row, col);

            let cast: f64 = value.as_();
            if !cast.is_finite() {
                debug!(row, col, "non-finite value in graph");
                return Err(Error::NonFinite { row, col });
            }

            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
    }

    debug!(size = graph.size(), ?min, ?max, "normalizing graph");

    if min >= max {
        return Err(Error::DegenerateRange);
    }

    // Scale in f64 so integer differences can't overflow.
    let (min, max): (f64, f64) = (min.as_(), max.as_());
    let range = max - min;

    let normalized = if range.is_finite() {
        graph.matrix().map(|value| {
            let value: f64 = value.as_();
            (value - min) / range
        })
    } else {
        // Finite bounds more than f64::MAX apart, halve everything to stay in range.
        let (min, range) = (min / 2.0, max / 2.0 - min / 2.0);
        graph.matrix().map(|value| {
            let value: f64 = value.as_();
            (value / 2.0 - min) / range
        })
    };

    Ok(DenseGraph::from_square(normalized))
}

/// Marks the edges whose value lies in the inclusive range `[lower, upper]`.
///
/// The output starts out with every cell set to `false`, only the cells in range are flipped to
/// `true`. An inverted range (`lower > upper`) therefore matches nothing and yields an all-false
/// graph.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use amgraph::graph::DenseGraph;
/// use amgraph::transform::segment;
///
/// let graph = DenseGraph::from_matrix(dmatrix![0, 5; 10, 15]).unwrap();
///
/// assert_eq!(
///     segment(&graph, 5, 10).into_matrix(),
///     dmatrix![false, true;
///              true, false]
/// );
/// ```
pub fn segment<T, G>(graph: &G, lower: T, upper: T) -> DenseGraph<bool>
where
    T: Element + PartialOrd,
    G: AsRef<DenseGraph<T>>,
{
    let graph = graph.as_ref();
    let size = graph.size();

    debug!(size, ?lower, ?upper, "segmenting graph");

    let mut segmented = DenseGraph::new(size);
    let cells = segmented.matrix_mut();

    for i in 0..size {
        for j in 0..size {
            let value = graph.get(i, j);

            if value >= lower && value <= upper {
                cells[(i, j)] = true;
            }
        }
    }

    segmented
}
