use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lowlight_core::{evaluate, Pattern, Range, Rule, TextDocument, Tier};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        let marker = match i % 97 {
            0 => "TODO revisit this",
            31 => "BEGIN generated",
            47 => "END generated",
            _ => "the quick brown fox jumps over the lazy dog",
        };
        out.push_str(&format!("{i:06} {marker} (lowlight benchmark line)\n"));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn rules() -> Vec<Rule> {
    vec![
        Rule::fragment(Pattern::new("TODO").unwrap(), Tier::Max),
        Rule::fragment(Pattern::new(r"\bfox\b").unwrap(), Tier::Min),
        Rule::block(
            Pattern::new("BEGIN generated").unwrap(),
            Pattern::new("END generated").unwrap(),
            Tier::Mid,
            Some(100),
        ),
    ]
}

fn bench_viewport_scan(c: &mut Criterion) {
    let doc = TextDocument::from_text(&large_text(50_000));
    let rules = rules();

    // A realistic editor viewport well into the file.
    let viewport = [Range::of(25_000, 0, 25_060, 0)];
    c.bench_function("viewport_scan/60_lines", |b| {
        b.iter(|| {
            let set = evaluate(
                black_box(&doc),
                black_box(&viewport),
                black_box(&rules),
                30_000,
            );
            black_box(set.len());
        })
    });
}

fn bench_ceiling_fallback_scan(c: &mut Criterion) {
    let doc = TextDocument::from_text(&large_text(50_000));
    let rules = rules();

    // Viewport entirely past the ceiling: every rule rescans the full
    // ceiling window, the engine's worst case.
    let viewport = [Range::of(45_000, 0, 45_060, 0)];
    c.bench_function("ceiling_fallback/1000_lines", |b| {
        b.iter(|| {
            let set = evaluate(
                black_box(&doc),
                black_box(&viewport),
                black_box(&rules),
                1_000,
            );
            black_box(set.len());
        })
    });
}

criterion_group!(benches, bench_viewport_scan, bench_ceiling_fallback_scan);
criterion_main!(benches);
