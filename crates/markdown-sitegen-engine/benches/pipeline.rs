use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{markdown_to_html_node, parsing::inline::text_to_spans};
mod common;

fn bench_document_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("markdown_to_html_node", |b| {
        b.iter(|| {
            let root = markdown_to_html_node(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(root);
        });
    });

    group.bench_function("render", |b| {
        let root = markdown_to_html_node(&content).unwrap();
        b.iter(|| std::hint::black_box(root.render().unwrap()));
    });

    group.finish();
}

fn bench_inline_tokenizer(c: &mut Criterion) {
    let line = "Some **bold** and *italic* with `code`, a [link](/x) and ![img](/y.png). "
        .repeat(50);
    c.bench_function("text_to_spans", |b| {
        b.iter(|| std::hint::black_box(text_to_spans(std::hint::black_box(&line)).unwrap()));
    });
}

fn bench_nested_quotes(c: &mut Criterion) {
    let content = common::generate_nested_quotes(16);
    c.bench_function("nested_quotes", |b| {
        b.iter(|| std::hint::black_box(markdown_to_html_node(std::hint::black_box(&content))));
    });
}

criterion_group!(
    benches,
    bench_document_pipeline,
    bench_inline_tokenizer,
    bench_nested_quotes
);
criterion_main!(benches);
