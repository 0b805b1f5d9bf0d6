use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rooftop::{CsrGraph, House, KernelConfig, MotifKernel, TriangleChain};

/// Deterministic quasi-random undirected graph with skewed degrees: a small
/// set of hubs touching everything plus a sparse pattern elsewhere.
fn skewed_graph(nodes: usize) -> CsrGraph {
    let mut adjacency = vec![Vec::new(); nodes];
    let mut connect = |a: usize, b: usize| {
        if a != b {
            adjacency[a].push(b as u32);
            adjacency[b].push(a as u32);
        }
    };

    for hub in 0..8 {
        for v in 0..nodes {
            connect(hub, v);
        }
    }
    for i in 0..nodes {
        for j in 1..16 {
            connect(i, (i + j * 7) % nodes);
        }
    }

    // from_adjacency sorts and deduplicates each row.
    CsrGraph::from_adjacency(&adjacency)
}

/// Roots sorted by descending degree, the order the dispatch loop expects
/// for a meaningful collaborative/fallback cut-over.
fn roots_by_degree(graph: &CsrGraph) -> Vec<u32> {
    let mut roots: Vec<u32> = (0..graph.vertex_count() as u32).collect();
    roots.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
    roots
}

fn bench_motif_kernels(c: &mut Criterion) {
    let graph = skewed_graph(1500);
    let roots = roots_by_degree(&graph);

    let config = KernelConfig {
        workers: 4,
        heavy_threshold: 64,
        branch_degree_threshold: 24,
        ..KernelConfig::default()
    };

    let house = MotifKernel::new(&graph, House, config.clone()).unwrap();
    c.bench_function("house_counts", |b| {
        b.iter(|| black_box(house.count(&roots)));
    });

    let chain = MotifKernel::new(&graph, TriangleChain, config).unwrap();
    c.bench_function("triangle_chain_counts", |b| {
        b.iter(|| black_box(chain.count(&roots)));
    });
}

criterion_group!(benches, bench_motif_kernels);
criterion_main!(benches);
