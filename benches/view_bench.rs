//! Benchmarks for view derivation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use worldcup_history::data::Dataset;
use worldcup_history::view::{dispatch, initial_view, map_figure, map_focus, SelectionState, ViewEvent};

fn bench_dispatch(c: &mut Criterion) {
    let dataset = Dataset::builtin().unwrap();
    let state = SelectionState::default();
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("select_country", |b| {
        b.iter(|| {
            dispatch(
                black_box(&dataset),
                black_box(&state),
                ViewEvent::SelectCountry(Some("Brazil".to_string())),
            )
        })
    });

    group.bench_function("select_year_no_data", |b| {
        b.iter(|| dispatch(black_box(&dataset), black_box(&state), ViewEvent::SelectYear(Some(1942))))
    });

    group.bench_function("initial_view", |b| {
        b.iter(|| initial_view(black_box(&dataset), black_box(&state)))
    });

    group.finish();
}

fn bench_map_figure(c: &mut Criterion) {
    let dataset = Dataset::builtin().unwrap();
    let focus = map_focus(&dataset, Some("Argentina"));

    c.bench_function("map_figure", |b| {
        b.iter(|| map_figure(black_box(&dataset), black_box(&focus)))
    });
}

criterion_group!(benches, bench_dispatch, bench_map_figure);
criterion_main!(benches);
