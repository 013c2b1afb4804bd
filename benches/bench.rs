// Criterion benchmarks for Resume Screen

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resume_screen::core::{composite_score, normalize, Analyzer};
use resume_screen::models::{CompositeWeights, GrammarReport, GrammarScale};

fn sample_resume(paragraphs: usize) -> String {
    let mut text = String::new();
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Managed a team of {} engineers and developed a machine learning \
             platform using python, sql, and tensorflow. Led the migration to a \
             new data analysis stack, improving efficiency by {}%. Created \
             dashboards in tableau and power bi for project management reviews. ",
            i + 2,
            10 + i
        ));
    }
    text
}

fn bench_normalize(c: &mut Criterion) {
    let text = sample_resume(10);
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&text)))
    });
}

fn bench_composite_score(c: &mut Criterion) {
    let weights = CompositeWeights::default();
    c.bench_function("composite_score", |b| {
        b.iter(|| {
            composite_score(
                black_box(44.44),
                black_box(12),
                black_box(85.0),
                black_box(96.0),
                black_box(&weights),
            )
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = Analyzer::with_defaults();
    let grammar = GrammarReport::from_issues(vec![], GrammarScale::Hundred);

    let mut group = c.benchmark_group("analyze");
    for paragraphs in [1, 10, 50] {
        let text = sample_resume(paragraphs);
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &text,
            |b, text| b.iter(|| analyzer.analyze(black_box(text), &grammar).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_composite_score, bench_analyze);
criterion_main!(benches);
