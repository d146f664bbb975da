use std::collections::VecDeque;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use neuronet_core::{CsrGraph, NodeId, SparseGraph};

#[derive(Parser, Debug)]
#[command(
    name = "neuronet-bench",
    about = "Benchmark CSR build, max-degree and bounded BFS on synthetic graphs"
)]
struct Args {
    /// Topology to generate.
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target node count per generated graph.
    #[arg(default_value_t = 5_000_000)]
    node_count: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Run every generator
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Preferential attachment via edge sampling (hub-and-spoke)
    Scalefree,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense cliques connected by a thin bridge
    Barbell,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
}

type Generator = fn(u32) -> Vec<(NodeId, NodeId)>;

fn main() {
    let args = Args::parse();

    println!("neuronet-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        Mode::Dla => vec![("DLA (organic branching)", gen_dla)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.node_count);
    }
}

fn run_benchmark(name: &str, generator: Generator, node_count: u32) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let edges = generator(node_count);
    println!(
        "Generated {} edges in {:.2}s",
        edges.len(),
        t.elapsed().as_secs_f64()
    );

    let t = Instant::now();
    let graph = CsrGraph::from_edges(edges);
    println!(
        "CSR built in {:.2}s: {} nodes, {} edges, ~{:.0}MB",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    let hub = graph.node_of_max_out_degree();
    let elapsed = t.elapsed();
    match hub {
        Some(node) => println!(
            "Max out-degree: node {} (degree {}) in {:.1}ms",
            node,
            graph.out_degree(node),
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!("Max out-degree: empty graph"),
    }

    // BFS from node 0 (root or seed for every generator)
    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "depth", "nodes", "edges", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = match graph.bfs(0, depth) {
            Ok(result) => result,
            Err(e) => {
                println!("{:>8} {}", depth, e);
                break;
            }
        };
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            depth,
            result.node_count(),
            result.edge_count(),
            elapsed.as_secs_f64() * 1000.0
        );
        // Deeper runs cannot find more once the frontier died out
        if result.max_depth_reached < depth {
            println!("{:>8} (frontier exhausted at depth {})", "", result.max_depth_reached);
            break;
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as u32
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// L-system fractal tree: every node spawns three children.
///
/// Deep paths (log depth) with exponential width; exercises many BFS levels.
fn gen_lsystem(node_count: u32) -> Vec<(NodeId, NodeId)> {
    let branching = 3u32;
    let mut edges = Vec::with_capacity(node_count as usize);
    let mut next_id: u32 = 1;
    let mut frontier: Vec<u32> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                edges.push((parent, next_id));
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    edges
}

/// Scale-free via edge-list sampling (O(edges), not O(n^2)).
///
/// Picking a random endpoint of an existing edge makes high-degree nodes
/// proportionally more likely targets.
fn gen_scale_free(node_count: u32) -> Vec<(NodeId, NodeId)> {
    let edges_per_node = 10u32;
    let seed = 5u32.min(node_count);
    let mut rng = FastRng::new(12345);
    let mut edges = Vec::with_capacity(node_count as usize * edges_per_node as usize);
    let mut endpoints: Vec<u32> = Vec::with_capacity(edges.capacity() * 2);

    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push((i, j));
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        if endpoints.is_empty() {
            break;
        }
        for _ in 0..edges_per_node.min(new_node) {
            let target = endpoints[rng.next(endpoints.len() as u32) as usize];
            if target != new_node {
                edges.push((new_node, target));
                endpoints.push(new_node);
                endpoints.push(target);
            }
        }
    }

    edges
}

/// Small-world (Watts-Strogatz): ring lattice with random rewiring.
fn gen_small_world(node_count: u32) -> Vec<(NodeId, NodeId)> {
    let k = 10u32;
    let p = 0.05f64;
    let mut rng = FastRng::new(67890);
    let mut edges = Vec::with_capacity(node_count as usize * k as usize);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = ((i as u64 + j as u64) % node_count as u64) as u32;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                edges.push((i, if rewired != i { rewired } else { neighbor }));
            } else {
                edges.push((i, neighbor));
            }
        }
    }

    edges
}

/// Erdos-Renyi: ~10 uniformly random edges per node, self-loops dropped.
fn gen_random(node_count: u32) -> Vec<(NodeId, NodeId)> {
    let target_edges = node_count as usize * 10;
    let mut rng = FastRng::new(54321);
    let mut edges = Vec::with_capacity(target_edges);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            edges.push((from, to));
        }
    }

    edges
}

/// Barbell: two dense cliques joined by a chain of ten bridge nodes.
fn gen_barbell(node_count: u32) -> Vec<(NodeId, NodeId)> {
    let bridge_len = 10u32;
    let clique_size = node_count.saturating_sub(bridge_len) / 2;
    let mut rng = FastRng::new(99999);
    let mut edges = Vec::with_capacity(clique_size as usize * 40 + bridge_len as usize);

    let mut fill_clique = |edges: &mut Vec<(NodeId, NodeId)>, base: u32| {
        for i in 0..clique_size {
            for _ in 0..20u32.min(clique_size.saturating_sub(1)) {
                let target = rng.next(clique_size);
                if target != i {
                    edges.push((base + i, base + target));
                }
            }
        }
    };

    fill_clique(&mut edges, 0);

    let bridge_start = clique_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let prev = if i == 0 { clique_size.saturating_sub(1) } else { id - 1 };
        edges.push((prev, id));
    }

    let b_start = bridge_start + bridge_len;
    if clique_size > 0 {
        edges.push((b_start - 1, b_start));
    }
    fill_clique(&mut edges, b_start);

    edges
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new node attaches to a recent "surface" node, with an occasional
/// second edge that creates loops and shortcuts.
fn gen_dla(node_count: u32) -> Vec<(NodeId, NodeId)> {
    let surface_max = 10000usize;
    let mut rng = FastRng::new(77777);
    let mut edges = Vec::with_capacity(node_count as usize * 2);
    let mut surface: VecDeque<u32> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u32) as usize];
        edges.push((new_node, attach_to));

        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                edges.push((new_node, other));
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    edges
}
