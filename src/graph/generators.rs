use crate::graph::{DirectedGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices and roughly `edge_factor * n`
/// edges carrying integer weights in `1..=max_weight`.
///
/// Self-loops and parallel edges are allowed, just as `add_edge` allows them.
/// The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::new(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(1..=max_weight.max(1));
        // Both endpoints are in range by construction
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width * height` grid where every cell links to its 8 neighbours.
/// Cardinal moves cost 1.0 and diagonal moves 1.4. Vertex `(x, y)` is `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new(width * height);

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    let _ = graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    debug_assert_eq!(graph.vertex_count(), width * height);
    graph
}
