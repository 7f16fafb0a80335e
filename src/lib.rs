//! Amgraph is a small toolkit for dense adjacency-matrix graphs, directed or undirected, and for
//! transforming their edge values.
//!
//! # Basic usage
//!
//! Graphs are created with a fixed number of vertices and every cell starts out as the element
//! type's "no edge" value (zero for numbers). Rows represent the connections from a vertex,
//! columns the connections to a vertex. Once populated, a graph can be rescaled with
//! [`normalize`](transform::normalize) or thresholded with [`segment`](transform::segment).
//!
//! ```rust
//! use amgraph::transform::{normalize, segment};
//! use amgraph::undirected::UndirectedGraph;
//!
//! // Construct the graph instance.
//! let mut graph = UndirectedGraph::new(3);
//!
//! // Insert some weighted edges, writes are mirrored across the diagonal.
//! graph.set_edge(0, 1, 2).unwrap();
//! graph.add_to_edge(0, 2, 4).unwrap();
//! assert_eq!(graph.get(2, 0), 4);
//!
//! // Out of range vertices are rejected and leave the graph untouched.
//! assert!(graph.set_edge(0, 3, 1).is_err());
//!
//! assert_eq!(graph.degree(), vec![2, 1, 1]);
//!
//! // Transforms produce new graphs of the same size.
//! let normalized = normalize(&graph).unwrap();
//! assert_eq!(normalized.get(0, 1), 0.5);
//!
//! let heavy = segment(&graph, 3, 10);
//! assert!(heavy.get(0, 2) && !heavy.get(0, 1));
//!
//! // Graphs can be pretty printed...
//! println!("{graph}");
//! // ...outputs:
//! // ---------------------
//! // |  v  |  0  |  1  |  2  |
//! // ---------------------
//! // |  0  |  0  |  2  |  4  |
//! // |  1  |  2  |  0  |  0  |
//! // |  2  |  4  |  0  |  0  |
//! // ---------------------
//! ```

pub mod directed;
pub mod element;
pub mod error;
pub mod graph;
pub mod transform;
pub mod undirected;
pub mod vector;

pub use error::{Error, Result};
