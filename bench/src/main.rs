use campus_route_core::{run_shortest_path, Graph, GraphResult, NodeId, Weight};
use std::collections::VecDeque;
use std::time::Instant;

type Generator = fn(usize) -> GraphResult<Graph>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: campus-route-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all        Run all generators and benchmark each (default)");
        println!("  campus     Built-in twelve-person campus (node_count ignored)");
        println!("  tree       Department hierarchy, three reports per node (deep paths)");
        println!("  ring       Ring lattice with random shortcuts (many equal-cost ties)");
        println!("  random     Uniform random directed edges");
        println!("  barbell    Two dense clusters joined by a thin corridor");
        println!("  dla        Organic branching with occasional long-range links");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    println!("campus-route-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "campus" => vec![("Demo campus", gen_campus)],
        "tree" => vec![("Hierarchy tree", gen_tree)],
        "ring" => vec![("Ring lattice + shortcuts", gen_ring)],
        "random" => vec![("Uniform random", gen_random)],
        "barbell" => vec![("Barbell (cluster-corridor-cluster)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("Demo campus", gen_campus as Generator),
            ("Hierarchy tree", gen_tree),
            ("Ring lattice + shortcuts", gen_ring),
            ("Uniform random", gen_random),
            ("Barbell (cluster-corridor-cluster)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, node_count) {
            eprintln!("{}: generator failed: {}", name, e);
        }
    }
}

fn run_benchmark(name: &str, generator: Generator, node_count: usize) -> GraphResult<()> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
    );

    let n = graph.node_count();
    if n == 0 {
        println!("(empty graph, nothing to query)");
        println!();
        return Ok(());
    }

    println!();
    println!(
        "{:>10} {:>10} {:>14} {:>10}",
        "source", "settled", "max distance", "time"
    );
    println!("{:->10} {:->10} {:->14} {:->10}", "", "", "", "");

    let mut rng = FastRng::new(2024);
    let sources: Vec<NodeId> = std::iter::once(0)
        .chain((0..4).map(|_| rng.next(n as u64) as NodeId))
        .collect();

    for source in sources {
        let t = Instant::now();
        let result = run_shortest_path(&graph, source)?;
        let elapsed = t.elapsed();
        let max_distance = result
            .distances()
            .iter()
            .filter_map(|d| d.finite())
            .max()
            .unwrap_or(0);
        println!(
            "{:>10} {:>10} {:>14} {:>8.1}ms",
            source,
            result.settled(),
            max_distance,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    // Path reconstruction: node 0 to last node
    let far_node = n - 1;
    let result = run_shortest_path(&graph, 0)?;
    let t = Instant::now();
    let path = result.path_to(far_node);
    let elapsed = t.elapsed();
    println!();
    if path.is_empty() {
        println!(
            "Path 0 → {}: unreachable ({:.3}ms)",
            far_node,
            elapsed.as_secs_f64() * 1000.0
        );
    } else {
        println!(
            "Path 0 → {}: {} hops, distance {} ({:.3}ms)",
            far_node,
            path.len() - 1,
            result.distance(far_node),
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Positive edge weight in `1..=20`.
    fn weight(&mut self) -> Weight {
        self.next(20) as Weight + 1
    }
}

fn gen_campus(_node_count: usize) -> GraphResult<Graph> {
    Ok(campus_route_core::demo_campus())
}

/// Hierarchy tree: each node has three children. Log-depth paths with
/// exponential width, like an org chart.
fn gen_tree(node_count: usize) -> GraphResult<Graph> {
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(42);

    let branching = 3;
    let mut next_id: NodeId = 1;
    let mut frontier: Vec<NodeId> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(parent, child, rng.weight())?;
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Ring lattice: each node links to its K clockwise neighbours with weight 1,
/// and a few edges are rewired to random targets. Lots of equal-distance ties.
fn gen_ring(node_count: usize) -> GraphResult<Graph> {
    let k = 5;
    let p = 0.05f64;
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count as u64) as NodeId;
                graph.add_edge(i, rewired, 1)?;
            } else {
                graph.add_edge(i, neighbor, 1)?;
            }
        }
    }

    Ok(graph)
}

/// Uniform random: ~10 outgoing edges per node on average.
fn gen_random(node_count: usize) -> GraphResult<Graph> {
    let target_edges = node_count * 10;
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count as u64) as NodeId;
        let to = rng.next(node_count as u64) as NodeId;
        if from != to {
            graph.add_edge(from, to, rng.weight())?;
        }
    }

    Ok(graph)
}

/// Barbell: two dense clusters joined by a one-way corridor of ten nodes.
///
/// Every path from the first cluster to the second goes through the corridor.
fn gen_barbell(node_count: usize) -> GraphResult<Graph> {
    let corridor = 10usize;
    if node_count < corridor + 4 {
        return gen_random(node_count);
    }
    let cluster = (node_count - corridor) / 2;
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(99999);

    let mut wire_cluster = |graph: &mut Graph, start: NodeId| -> GraphResult<()> {
        for i in 0..cluster {
            for _ in 0..20usize.min(cluster - 1) {
                let target = rng.next(cluster as u64) as NodeId;
                if target != i {
                    graph.add_edge(start + i, start + target, rng.weight())?;
                }
            }
        }
        Ok(())
    };

    wire_cluster(&mut graph, 0)?;

    let corridor_start = cluster;
    graph.add_edge(cluster - 1, corridor_start, 1)?;
    for i in 1..corridor {
        graph.add_edge(corridor_start + i - 1, corridor_start + i, 1)?;
    }

    let b_start = corridor_start + corridor;
    graph.add_edge(b_start - 1, b_start, 1)?;
    wire_cluster(&mut graph, b_start)?;

    Ok(graph)
}

/// DLA: each new node is linked from a recently added "surface" node, with
/// an occasional second link from anywhere. Produces winding tree-like paths.
fn gen_dla(node_count: usize) -> GraphResult<Graph> {
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(77777);

    let mut surface: VecDeque<NodeId> = VecDeque::with_capacity(10001);
    surface.push_back(0);
    let surface_max = 10000usize;

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_edge(attach_to, new_node, rng.weight())?;

        // 10% chance of a second incoming link (creates shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node as u64) as NodeId;
            if other != attach_to {
                graph.add_edge(other, new_node, rng.weight())?;
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    Ok(graph)
}
