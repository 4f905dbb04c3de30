use coursemark_engine::{format_message, render_markdown, sanitize_diagram_source};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
mod common;

fn bench_render_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_markdown");
    group.sample_size(10);

    for size in [1, 10, 100] {
        let content = common::generate_lesson_markdown(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| render_markdown(std::hint::black_box(content)));
        });
    }

    group.finish();
}

fn bench_rerender_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("rerender");
    group.sample_size(10);

    let html = render_markdown(&common::generate_lesson_markdown(100));
    group.bench_function("render_own_output", |b| {
        b.iter(|| render_markdown(std::hint::black_box(&html)));
    });

    group.finish();
}

fn bench_sanitize_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram");
    group.sample_size(10);

    let source = common::generate_diagram_source(500);
    group.bench_function("sanitize", |b| {
        b.iter(|| sanitize_diagram_source(std::hint::black_box(&source)));
    });

    group.finish();
}

fn bench_format_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat");
    group.sample_size(10);

    let message = "Use `Vec<T>` here.\n```\nlet v = vec![1, 2];\n```\n**Note**: *always* check bounds.\n".repeat(50);
    group.bench_function("format_message", |b| {
        b.iter(|| format_message(std::hint::black_box(&message)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_render_markdown,
    bench_rerender_output,
    bench_sanitize_diagram,
    bench_format_message
);
criterion_main!(benches);
