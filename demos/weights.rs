use amgraph::{
    directed::DirectedGraph,
    transform::{normalize, segment},
    undirected::UndirectedGraph,
    Error,
};
use tracing_subscriber::EnvFilter;

// Trips observed between junctions, as (from, to, count).
const TRIPS: [(usize, usize, u32); 7] = [
    (0, 1, 12),
    (1, 0, 3),
    (1, 2, 7),
    (2, 3, 1),
    (3, 0, 9),
    (0, 1, 4),
    (2, 1, 2),
];

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    const N: usize = 4;

    // One way traffic: each direction is counted separately.
    let mut traffic = DirectedGraph::new(N);
    // Road usage: both directions share the same road.
    let mut roads = UndirectedGraph::new(N);

    for (from, to, count) in TRIPS {
        traffic.add_to_edge(from, to, count)?;
        roads.add_to_edge(from, to, count)?;
    }

    println!("\nDirected traffic between {N} junctions:\n{traffic}");
    println!("\nRoad usage:\n{roads}");
    println!("\nRoads per junction: {:?}", roads.degree());

    let normalized = normalize(&roads)?;
    println!("\nNormalized road usage:\n{}", normalized.matrix());

    let busy = segment(&roads, 10, u32::MAX);
    println!("\nBusy roads (10 trips or more):\n{busy}");

    // Recording a trip to a junction that doesn't exist is rejected.
    if let Err(err) = traffic.add_to_edge(0, N, 1) {
        println!("\nRejected trip: {err}");
    }

    Ok(())
}
