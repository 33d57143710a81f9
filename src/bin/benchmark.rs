use std::env;
use std::time::{Duration, Instant};

use indexed_sssp::algorithm::dijkstra::Dijkstra;
use indexed_sssp::algorithm::{SearchConfig, ShortestPathAlgorithm, StalePolicy};
use indexed_sssp::graph::generators::generate_random;
use indexed_sssp::graph::{DirectedGraph, Graph};
use indexed_sssp::ShortestPathEngine;

// Function to benchmark a policy on a graph
fn benchmark_policy(
    policy: StalePolicy,
    graph: &DirectedGraph<u64>,
    source: usize,
) -> (Duration, usize) {
    println!("Running {:?} on graph with {} vertices...", policy, graph.vertex_count());

    let dijkstra = Dijkstra::with_config(SearchConfig::new().with_stale_policy(policy));
    let start = Instant::now();
    let result = match dijkstra.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - {:?} failed: {}", policy, e);
            return (start.elapsed(), 0);
        }
    };
    let duration = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    (duration, reachable)
}

fn main() {
    env_logger::init();

    // Optional first argument: edge factor
    let edge_factor = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4.0);

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];

    println!("=====================================================");
    println!("Benchmark: lazy vs evicting stale records");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 1_000, size as u64);
        let source = 0;

        let (lazy_time, lazy_reach) = benchmark_policy(StalePolicy::Lazy, &graph, source);
        let (evict_time, evict_reach) = benchmark_policy(StalePolicy::Evict, &graph, source);
        assert_eq!(lazy_reach, evict_reach, "policies disagree on reachability");

        // Point query with early exit through the engine
        let mut engine = ShortestPathEngine::from_graph(graph);
        let target = size - 1;
        let start = Instant::now();
        let distance = engine.dijkstra(source, target);
        let query_time = start.elapsed();
        println!(
            "  - Point query {} -> {}: {:?} in {:?} ({} pops, {} stale)",
            source,
            target,
            distance,
            query_time,
            engine.last_stats().pops,
            engine.last_stats().stale_pops
        );

        results.push((size, lazy_time, evict_time, query_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<10}",
        "Vertices", "Lazy (ms)", "Evict (ms)", "Query (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for (size, lazy_time, evict_time, query_time) in &results {
        let ratio = evict_time.as_secs_f64() / lazy_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<12} | {:<12} | {:<12} | {:<10.2}",
            size,
            lazy_time.as_millis(),
            evict_time.as_millis(),
            query_time.as_millis(),
            ratio
        );
    }
}
