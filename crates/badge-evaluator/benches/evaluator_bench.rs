//! 徽章评估性能基准测试

use badge_evaluator::{BadgeCatalog, BadgeEvaluator, CatalogRegistry, Xp, evaluate_badges};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

/// 不同经验值下的评估开销
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_badges");

    for catalog in BadgeCatalog::builtins() {
        for xp in [0u64, 100, 1000, u64::MAX] {
            group.bench_with_input(
                BenchmarkId::new(catalog.name().to_string(), xp),
                &xp,
                |b, &xp| b.iter(|| evaluate_badges(black_box(&catalog), black_box(Xp::new(xp)))),
            );
        }
    }

    group.finish();
}

/// 进度报告
fn bench_progress(c: &mut Criterion) {
    let evaluator = BadgeEvaluator::new(Arc::new(BadgeCatalog::extended()));

    c.bench_function("progress_extended_777", |b| {
        b.iter(|| evaluator.progress(black_box(Xp::new(777))))
    });
}

/// 目录解析 + 评估（对应一次 HTTP 请求的核心路径）
fn bench_registry_lookup(c: &mut Criterion) {
    let registry = CatalogRegistry::builtin();

    c.bench_function("registry_resolve_and_evaluate", |b| {
        b.iter(|| {
            registry
                .evaluator(black_box(Some("extended")))
                .map(|e| e.evaluate(Xp::new(black_box(500))))
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_progress, bench_registry_lookup);
criterion_main!(benches);
