//! Rendering benchmarks for wide, deep and mixed formulas.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use type_formula::TypeFormula;

fn wide(width: usize) -> TypeFormula {
    TypeFormula::new(
        "tuple",
        (0..width).map(|i| TypeFormula::leaf(format!("T{i}"))).collect(),
    )
}

fn deep(depth: usize) -> TypeFormula {
    let mut ty = TypeFormula::leaf("Int");
    for _ in 1..depth {
        ty = TypeFormula::new("List", vec![ty]);
    }
    ty
}

/// Binary tree of `Pair`s with `depth` levels.
fn balanced(depth: usize) -> TypeFormula {
    if depth <= 1 {
        return TypeFormula::leaf("u8");
    }
    TypeFormula::new("Pair", vec![balanced(depth - 1), balanced(depth - 1)])
}

fn bench_render_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_wide");

    for width in [1, 16, 256, 4096].iter() {
        let ty = wide(*width);
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, _| {
            b.iter(|| black_box(&ty).to_string());
        });
    }

    group.finish();
}

fn bench_render_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_deep");

    for depth in [1, 16, 256, 4096].iter() {
        let ty = deep(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| black_box(&ty).to_string());
        });
    }

    group.finish();
}

fn bench_render_balanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_balanced");

    for depth in [4, 8, 12].iter() {
        let ty = balanced(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| black_box(&ty).to_string());
        });
    }

    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let ty = balanced(12);
    c.bench_function("depth_balanced_12", |b| b.iter(|| black_box(&ty).depth()));
}

criterion_group!(
    benches,
    bench_render_wide,
    bench_render_deep,
    bench_render_balanced,
    bench_depth
);
criterion_main!(benches);
