use criterion::{Criterion, black_box, criterion_group, criterion_main};
use astrocal_ephem::{Body, Ephemeris};
use astrocal_search::{
    BodyLongitude, IngressConfig, PhaseConfig, YearSpan, find_lunar_phases,
    find_retrograde_intervals, find_sign_changes,
};

fn span() -> YearSpan {
    YearSpan::new(2026, 1.0).expect("valid span")
}

fn ingress_bench(c: &mut Criterion) {
    let span = span();
    let moon = BodyLongitude::new(Ephemeris::default(), Body::Moon);

    let mut group = c.benchmark_group("ingress");
    group.sample_size(20);
    group.bench_function("moon_daily", |b| {
        b.iter(|| {
            find_sign_changes(black_box(&moon), black_box(&span), &IngressConfig::daily())
                .expect("search should succeed")
        })
    });
    group.bench_function("moon_refined", |b| {
        b.iter(|| {
            find_sign_changes(black_box(&moon), black_box(&span), &IngressConfig::refined())
                .expect("search should succeed")
        })
    });
    group.finish();
}

fn retrograde_bench(c: &mut Criterion) {
    let span = span();
    let mercury = BodyLongitude::new(Ephemeris::default(), Body::Mercury);

    c.bench_function("retrograde_mercury", |b| {
        b.iter(|| {
            find_retrograde_intervals(black_box(&mercury), black_box(&span))
                .expect("search should succeed")
        })
    });
}

fn lunar_phase_bench(c: &mut Criterion) {
    let span = span();
    let eph = Ephemeris::default();
    let moon = BodyLongitude::new(eph, Body::Moon);
    let sun = BodyLongitude::new(eph, Body::Sun);

    let mut group = c.benchmark_group("lunar_phase");
    group.sample_size(20);
    group.bench_function("year_2026", |b| {
        b.iter(|| {
            find_lunar_phases(&moon, &sun, black_box(&span), &PhaseConfig::default())
                .expect("search should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, ingress_bench, retrograde_bench, lunar_phase_bench);
criterion_main!(benches);
