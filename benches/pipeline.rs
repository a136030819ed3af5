//! Benchmarks for template parsing and grid moves.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilegrid::{parse_template, Editor, Gesture, Grid, Legend, Location, DEFAULT_TEMPLATE};

fn large_template(size: usize) -> String {
    let mut source = String::new();
    for row in 0..size {
        let line: Vec<&str> = (0..size)
            .map(|col| if (row + col) % 7 == 0 { "x" } else { "." })
            .collect();
        source.push_str(&line.join(" "));
        source.push('\n');
    }
    source
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let legend = Legend::default();
    let large = large_template(100);

    group.bench_function("parse_default", |b| {
        b.iter(|| parse_template(black_box(DEFAULT_TEMPLATE), &legend).unwrap())
    });

    group.bench_function("parse_100x100", |b| {
        b.iter(|| parse_template(black_box(&large), &legend).unwrap())
    });

    group.finish();
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    let grid = Grid::from_template(&large_template(100)).unwrap();

    group.bench_function("swap_100x100", |b| {
        b.iter(|| {
            grid.swap(black_box(Location::new(0, 0)), black_box(Location::new(99, 98)))
                .unwrap()
        })
    });

    group.bench_function("drag_default", |b| {
        b.iter(|| {
            let mut editor = Editor::from_template(DEFAULT_TEMPLATE, &Legend::default()).unwrap();
            editor.dispatch(Gesture::DragStart(Location::new(4, 5))).unwrap();
            editor.dispatch(Gesture::DragEnter(Location::new(0, 0))).unwrap();
            editor.dispatch(Gesture::Drop(Location::new(0, 0))).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_moves);
criterion_main!(benches);
