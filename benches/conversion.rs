//! Benchmarks for the formatting pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use unimark::{FontStyle, convert_markdown_to_fb, convert_to_unicode, post_process, style_config};

/// A representative mixed-script document exercising every block type.
fn sample_document() -> String {
    let mut doc = String::from("# 發布說明Release Notes\n\n## Highlights\n\n");
    for i in 0..50 {
        doc.push_str(&format!(
            "Paragraph {i} with **bold text段落** and a [link](https://example.com/{i}).\n\n"
        ));
        doc.push_str("- First item\n- Second item\n\n> Quoted wisdom\n\n---\n\n");
        doc.push_str("| Name | Role |\n| --- | --- |\n| Alice | Engineer |\n| Bob | Designer |\n\n");
    }
    doc
}

fn bench_render(c: &mut Criterion) {
    let doc = sample_document();
    let config = style_config("structured").unwrap();

    c.bench_function("render_structured", |b| {
        b.iter(|| convert_markdown_to_fb(std::hint::black_box(&doc), config))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let doc = sample_document();
    let config = style_config("social").unwrap();

    c.bench_function("pipeline_social_pangu", |b| {
        b.iter(|| {
            let rendered = convert_markdown_to_fb(std::hint::black_box(&doc), config);
            post_process(&rendered, true)
        })
    });
}

fn bench_font_engine(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog 0123456789 ".repeat(100);

    c.bench_function("font_sans_serif_bold", |b| {
        b.iter(|| convert_to_unicode(std::hint::black_box(&text), FontStyle::SansSerifBold))
    });

    c.bench_function("font_upside_down", |b| {
        b.iter(|| convert_to_unicode(std::hint::black_box(&text), FontStyle::UpsideDown))
    });
}

criterion_group!(benches, bench_render, bench_full_pipeline, bench_font_engine);
criterion_main!(benches);
