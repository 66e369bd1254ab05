use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pn_core::{Family, Mode};
use pn_translate::{HumanParams, Kwargs, signature, translate};
use std::hint::black_box;

fn full_kwargs(family: Family) -> Kwargs {
    signature(family).iter().map(|p| (p.name, 1.5_f64)).collect()
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate_kwargs");
    for family in Family::ALL {
        let kwargs = full_kwargs(family);
        group.bench_with_input(BenchmarkId::new("fit", family.name()), &kwargs, |b, kw| {
            b.iter(|| black_box(translate(family, kw, Mode::Fit).unwrap()))
        });
    }
    group.finish();

    let greek = Kwargs::new().with("μ", 2.0).with("σ", 2.45);
    c.bench_function("translate_normal_greek", |b| {
        b.iter(|| black_box(translate(Family::Normal, &greek, Mode::Construct).unwrap()))
    });

    let typed = HumanParams::Beta { alpha: Some(2.0), beta: Some(5.0), loc: None, scale: None };
    c.bench_function("translate_beta_typed", |b| {
        b.iter(|| black_box(typed.translate(Mode::Construct).unwrap()))
    });
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
