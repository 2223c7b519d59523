//! Benchmarks for Borůvka on Erdős–Rényi graphs, from each input format.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_mst::random::{create_rng, ErdosRenyi};
use u_mst::{find_mst, spanning_forest_from_list, spanning_forest_from_matrix, Graph};

const SIZES: [usize; 3] = [50, 200, 800];

fn random_graph(vertices: usize, probability: f64) -> Graph {
    ErdosRenyi::new(probability)
        .and_then(|model| model.generate(vertices, &mut create_rng(vertices as u64)))
        .expect("valid generator parameters")
}

fn bench_graph_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("boruvka_graph");
    for n in SIZES {
        let graph = random_graph(n, 0.1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| find_mst(black_box(g)))
        });
    }
    group.finish();
}

fn bench_list_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("boruvka_adjacency_list");
    for n in SIZES {
        let list = random_graph(n, 0.1).to_adjacency_list();
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, l| {
            b.iter(|| spanning_forest_from_list(black_box(l)))
        });
    }
    group.finish();
}

fn bench_matrix_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("boruvka_adjacency_matrix");
    for n in SIZES {
        let matrix = random_graph(n, 0.1)
            .to_adjacency_matrix()
            .expect("generated weights are positive");
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| spanning_forest_from_matrix(black_box(m)))
        });
    }
    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    let graph = random_graph(300, 0.75);
    c.bench_function("boruvka_dense_300", |b| b.iter(|| find_mst(black_box(&graph))));
}

criterion_group!(
    benches,
    bench_graph_input,
    bench_list_input,
    bench_matrix_input,
    bench_dense
);
criterion_main!(benches);
