use std::collections::BTreeSet;

use amgraph::{
    directed::DirectedGraph, graph::DenseGraph, transform::normalize, transform::segment,
    undirected::UndirectedGraph, Error,
};
use nalgebra::DMatrix;
use proptest::prelude::*;

const MAX_SIZE: usize = 8;

/// A square matrix of small weights, between 1x1 and `MAX_SIZE`x`MAX_SIZE`.
fn arb_matrix() -> impl Strategy<Value = DMatrix<i64>> {
    (1..=MAX_SIZE).prop_flat_map(|n| {
        prop::collection::vec(-1_000i64..1_000, n * n)
            .prop_map(move |cells| DMatrix::from_vec(n, n, cells))
    })
}

/// A sequence of `(i, j, value)` writes, indices may fall outside of a graph of `MAX_SIZE`.
fn arb_writes() -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((0..MAX_SIZE + 2, 0..MAX_SIZE + 2, -50i64..50), 0..32)
}

proptest! {
    #[test]
    fn directed_set_edge_touches_one_cell(
        matrix in arb_matrix(),
        (i, j) in (0..MAX_SIZE, 0..MAX_SIZE),
        value in any::<i64>(),
    ) {
        let n = matrix.nrows();
        let (i, j) = (i % n, j % n);

        let mut graph = DirectedGraph::from_matrix(matrix.clone()).unwrap();
        graph.set_edge(i, j, value).unwrap();

        let mut expected = matrix;
        expected[(i, j)] = value;

        prop_assert_eq!(graph.get(i, j), value);
        prop_assert_eq!(graph.matrix(), &expected);
    }

    #[test]
    fn undirected_stays_symmetric(size in 0..=MAX_SIZE, writes in arb_writes()) {
        let mut graph = UndirectedGraph::new(size);

        for (i, j, value) in writes {
            let before = graph.clone();
            let in_bounds = i < size && j < size;

            if value % 2 == 0 {
                prop_assert_eq!(graph.set_edge(i, j, value).is_ok(), in_bounds);
            } else {
                prop_assert_eq!(graph.add_to_edge(i, j, value).is_ok(), in_bounds);
            }

            if in_bounds {
                prop_assert_eq!(graph.get(i, j), graph.get(j, i));
            } else {
                // A rejected write changes nothing.
                prop_assert_eq!(&graph, &before);
            }

            prop_assert_eq!(graph.matrix(), &graph.matrix().transpose());
        }
    }

    #[test]
    fn out_of_bounds_writes_are_rejected(
        matrix in arb_matrix(),
        offset in 0..MAX_SIZE,
        value in any::<i64>(),
    ) {
        let n = matrix.nrows();
        let mut graph = DenseGraph::from_matrix(matrix.clone()).unwrap();

        prop_assert_eq!(
            graph.set_edge(n + offset, 0, value),
            Err(Error::OutOfBounds { from: n + offset, to: 0, size: n })
        );
        prop_assert_eq!(graph.matrix(), &matrix);
    }

    #[test]
    fn resize_zeroes_every_cell(matrix in arb_matrix(), size in 0..=MAX_SIZE) {
        let mut graph = DirectedGraph::from_matrix(matrix).unwrap();
        graph.resize(size);

        prop_assert_eq!(graph.size(), size);
        prop_assert!(graph.matrix().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn add_twice_is_set_double(
        size in 1..=MAX_SIZE,
        (i, j) in (0..MAX_SIZE, 0..MAX_SIZE),
        value in -1_000_000i64..1_000_000,
    ) {
        let (i, j) = (i % size, j % size);

        let mut added = DirectedGraph::new(size);
        added.add_to_edge(i, j, value).unwrap();
        added.add_to_edge(i, j, value).unwrap();

        let mut set = DirectedGraph::new(size);
        set.set_edge(i, j, 2 * value).unwrap();

        prop_assert_eq!(added, set);
    }

    #[test]
    fn add_overflow_leaves_graph_unchanged(
        size in 1..=MAX_SIZE,
        (i, j) in (0..MAX_SIZE, 0..MAX_SIZE),
        start in any::<u8>(),
        value in any::<u8>(),
    ) {
        let (i, j) = (i % size, j % size);
        let fits = start.checked_add(value).is_some();

        let mut directed = DirectedGraph::new(size);
        directed.set_edge(i, j, start).unwrap();
        let before = directed.clone();
        let result = directed.add_to_edge(i, j, value);

        if fits {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(Error::Overflow { from: i, to: j }));
            prop_assert_eq!(directed, before);
        }

        let mut undirected = UndirectedGraph::new(size);
        undirected.set_edge(i, j, start).unwrap();
        let before = undirected.clone();
        let result = undirected.add_to_edge(i, j, value);

        if fits {
            prop_assert!(result.is_ok());
            prop_assert_eq!(undirected.get(j, i), undirected.get(i, j));
        } else {
            prop_assert_eq!(result, Err(Error::Overflow { from: i, to: j }));
            prop_assert_eq!(undirected, before);
        }
    }

    #[test]
    fn degree_counts_distinct_edges(
        size in 1..=MAX_SIZE,
        vertex in 0..MAX_SIZE,
        targets in prop::collection::vec(0..MAX_SIZE, 0..=MAX_SIZE),
    ) {
        let vertex = vertex % size;
        let targets: BTreeSet<usize> = targets.into_iter().filter(|&t| t < size).collect();

        let mut graph = UndirectedGraph::new(size);
        for &target in &targets {
            graph.set_edge(vertex, target, 1u8).unwrap();
        }

        prop_assert_eq!(graph.degree()[vertex], targets.len());
    }

    #[test]
    fn normalize_into_unit_range(matrix in arb_matrix()) {
        let min = matrix.iter().copied().min().unwrap();
        let max = matrix.iter().copied().max().unwrap();
        prop_assume!(min != max);

        let graph = DenseGraph::from_matrix(matrix.clone()).unwrap();
        let normalized = normalize(&graph).unwrap();

        prop_assert_eq!(normalized.size(), graph.size());
        for (value, scaled) in matrix.iter().zip(normalized.matrix().iter()) {
            prop_assert!((0.0..=1.0).contains(scaled));

            if *value == min {
                prop_assert_eq!(*scaled, 0.0);
            }
            if *value == max {
                prop_assert_eq!(*scaled, 1.0);
            }
        }
    }

    #[test]
    fn normalize_constant_is_degenerate(size in 1..=MAX_SIZE, value in any::<i32>()) {
        let graph = DenseGraph::from_matrix(DMatrix::from_element(size, size, value)).unwrap();

        prop_assert_eq!(normalize(&graph), Err(Error::DegenerateRange));
    }

    #[test]
    fn segment_marks_values_in_range(
        matrix in arb_matrix(),
        lower in -1_000i64..1_000,
        upper in -1_000i64..1_000,
    ) {
        let graph = DenseGraph::from_matrix(matrix.clone()).unwrap();
        let segmented = segment(&graph, lower, upper);

        prop_assert_eq!(segmented.size(), graph.size());
        for (value, marked) in matrix.iter().zip(segmented.matrix().iter()) {
            prop_assert_eq!(*marked, lower <= *value && *value <= upper);
        }
    }
}
