//! Binding and lambda-check benchmarks.
//!
//! Measures bind + check time over generated files with a growing number of
//! lambdas, half of them replaceable.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lamref::binder::BinderState;
use lamref::checker::{CheckerOptions, CheckerState};
use lamref::common::JavaVersion;
use lamref::parser::{NodeArena, NodeIndex};
use lamref::syntax::TreeBuilder;
use std::hint::black_box;

/// `class Gen { void m() { Function f0 = x -> f(x); BiFunction g1 = (a, b) -> g(b, a); ... } }`
fn generated_file(lambdas: usize) -> (NodeArena, NodeIndex) {
    let mut b = TreeBuilder::new("Gen.java");
    let class_name = b.ident("Gen");
    let method_name = b.ident("m");
    let mut stmts = Vec::with_capacity(lambdas);

    for i in 0..lambdas {
        let lambda = if i % 2 == 0 {
            let head = b.lambda_params(&["x"]);
            let x = b.ident("x");
            let call = b.invoke("f", vec![x]);
            b.lambda(head, call)
        } else {
            let head = b.lambda_params(&["a", "b"]);
            let second = b.ident("b");
            let first = b.ident("a");
            let call = b.invoke("g", vec![second, first]);
            b.lambda(head, call)
        };
        stmts.push(b.variable("Function", &format!("v{i}"), lambda));
    }

    let body = b.block(stmts);
    let method = b.method(method_name, vec![], body);
    let class = b.class(class_name, vec![method]);
    let root = b.source_file(vec![class]);
    (b.into_arena(), root)
}

fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");
    for &n in &[10usize, 100, 1000] {
        let (arena, root) = generated_file(n);
        group.bench_with_input(BenchmarkId::new("lambdas", n), &n, |bench, _| {
            bench.iter(|| {
                let mut binder = BinderState::new();
                binder.bind_source_file(&arena, root);
                black_box(binder.symbols.len())
            });
        });
    }
    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");
    let options = CheckerOptions::default().with_source_version(JavaVersion::new(8));
    for &n in &[10usize, 100, 1000] {
        let (arena, root) = generated_file(n);
        let mut binder = BinderState::new();
        binder.bind_source_file(&arena, root);
        group.bench_with_input(BenchmarkId::new("lambdas", n), &n, |bench, _| {
            bench.iter(|| {
                let mut checker =
                    CheckerState::new(&arena, Some(&binder), "Gen.java", options.clone());
                checker.check_source_file(root);
                black_box(checker.ctx.diagnostics.len())
            });
        });
    }
    group.finish();
}

criterion_group!(check_benches, bench_bind, bench_check);
criterion_main!(check_benches);
