use colored::Colorize;
use indexed_sssp::graph::Graph;
use indexed_sssp::{Weight, ShortestPathEngine};

fn main() -> Result<(), indexed_sssp::Error> {
    env_logger::init();

    // Create a simple directed graph with vertices 0-5; vertex 5 is isolated
    let mut engine = ShortestPathEngine::<u32>::new(6);

    // Add edges with weights
    engine.add_edge(0, 1, 6)?;
    engine.add_edge(0, 2, 3)?;
    engine.add_edge(1, 3, 2)?;
    engine.add_edge(2, 1, 2)?;
    engine.add_edge(2, 3, 5)?;
    engine.add_edge(3, 4, 5)?;

    let source = 0;

    println!("{}", "--- Shortest paths on a simple graph ---".bold());
    println!(
        "Graph has {} vertices and {} edges",
        engine.graph().vertex_count(),
        engine.graph().edge_count()
    );

    for target in 0..engine.graph().vertex_count() {
        let distance = engine.dijkstra(source, target)?;
        if distance.is_infinite() {
            println!("Vertex {}: {}", target, "unreachable".red());
            continue;
        }
        let path = engine.reconstruct_path(source, target)?;
        println!(
            "Vertex {}: distance = {}, path = {:?}",
            target,
            distance.to_string().green(),
            path
        );
    }

    let stats = engine.last_stats();
    println!(
        "\nLast query: {} pushes, {} pops, {} stale",
        stats.pushes, stats.pops, stats.stale_pops
    );

    Ok(())
}
