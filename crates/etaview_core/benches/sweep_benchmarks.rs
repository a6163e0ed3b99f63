//! Criterion benchmarks for etaview_core sweeps
//!
//! Run with: cargo bench -p etaview_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use etaview_core::regressor::{DecisionTree, ForestModel, Regressor, TreeNode};
use etaview_core::sweep::sweep;
use etaview_core::{Feature, FeatureVector};

fn create_forest(n_trees: usize) -> ForestModel {
    let columns = Feature::ORDER
        .iter()
        .map(|f| f.column_name().to_string())
        .collect();

    let trees = (0..n_trees)
        .map(|i| {
            // Depth-2 trees splitting on distance then rating
            let offset = i as f64 * 0.1;
            DecisionTree {
                nodes: vec![
                    TreeNode::Split {
                        feature: Feature::Distance.index() as u32,
                        threshold: 20.0 + offset,
                        left: 1,
                        right: 2,
                    },
                    TreeNode::Split {
                        feature: Feature::Rating.index() as u32,
                        threshold: 3.5,
                        left: 3,
                        right: 4,
                    },
                    TreeNode::Leaf {
                        value: 60.0 + offset,
                    },
                    TreeNode::Leaf { value: 35.0 },
                    TreeNode::Leaf { value: 25.0 },
                ],
            }
        })
        .collect();

    ForestModel {
        columns,
        base_score: 10.0,
        trees,
    }
}

fn bench_distance_sweep(c: &mut Criterion) {
    let baseline = FeatureVector::new(4.5, 25.0, 10.0);
    let values = Feature::Distance.sweep_values();

    let mut group = c.benchmark_group("distance_sweep");
    for n_trees in [10, 100] {
        let model = create_forest(n_trees);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_trees),
            &model,
            |b, model: &ForestModel| {
                b.iter(|| {
                    sweep(
                        model,
                        &Feature::ORDER,
                        black_box(&baseline),
                        Feature::Distance,
                        black_box(&values),
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_batch_vs_per_row(c: &mut Criterion) {
    let model = create_forest(100);
    let baseline = FeatureVector::new(4.5, 25.0, 10.0);
    let values = Feature::Distance.sweep_values();

    c.bench_function("per_row_baseline", |b| {
        b.iter(|| {
            // The amortization the sweep exists to avoid: one call per value
            for &value in black_box(&values) {
                sweep(
                    &model,
                    &Feature::ORDER,
                    &baseline,
                    Feature::Distance,
                    &[value],
                )
                .unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_distance_sweep, bench_batch_vs_per_row);
criterion_main!(benches);
