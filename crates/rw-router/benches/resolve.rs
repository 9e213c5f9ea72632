//! Benchmarks for clean URL resolution.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rw_router::{RouteTable, Router, resolve_redirect};

/// Create a route table with `sections` sections of `pages` pages each.
fn create_routes(sections: usize, pages: usize) -> RouteTable {
    let mut routes = RouteTable::from_paths(["/"]);
    for s in 0..sections {
        routes.push(format!("/section-{s}/"));
        for p in 0..pages {
            routes.push(format!("/section-{s}/page-{p}.html"));
        }
    }
    routes
}

fn bench_resolve_redirect(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_redirect");

    for size in [10, 50, 200] {
        let routes = create_routes(size, 10);
        let last = size - 1;

        group.bench_with_input(BenchmarkId::new("exact", size), &routes, |b, routes| {
            b.iter(|| resolve_redirect(routes, black_box("/section-0/")));
        });

        group.bench_with_input(BenchmarkId::new("to_html", size), &routes, |b, routes| {
            let path = format!("/section-{last}/page-9");
            b.iter(|| resolve_redirect(routes, black_box(&path)));
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &routes, |b, routes| {
            b.iter(|| resolve_redirect(routes, black_box("/nonexistent")));
        });
    }

    group.finish();
}

fn bench_router_navigate(c: &mut Criterion) {
    let router = Router::new(create_routes(50, 10));

    c.bench_function("router_navigate_redirect", |b| {
        b.iter(|| router.navigate(black_box("/section-25")));
    });
}

criterion_group!(benches, bench_resolve_redirect, bench_router_navigate);
criterion_main!(benches);
