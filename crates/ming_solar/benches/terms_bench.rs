use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ming_solar::{major_terms_for_year, solar_terms_for_year};

fn term_scan_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_terms");
    group.sample_size(20);
    group.bench_function("full_year_scan", |b| {
        b.iter(|| solar_terms_for_year(black_box(2024)))
    });
    group.bench_function("major_terms", |b| {
        b.iter(|| major_terms_for_year(black_box(2024)))
    });
    group.finish();
}

criterion_group!(benches, term_scan_bench);
criterion_main!(benches);
