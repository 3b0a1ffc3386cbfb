use chrono::Utc;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use turtcode_core::RandEntropy;
use turtcode_turtle::{Attributes, Turtle};

fn bench_hatch(c: &mut Criterion) {
    let mut rng = RandEntropy::seeded(1);
    c.bench_function("attributes_roll", |b| {
        b.iter(|| black_box(Attributes::roll(&mut rng)))
    });
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    for ticks in [1usize, 144, 1_008] {
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &ticks, |b, &ticks| {
            let mut rng = RandEntropy::seeded(2);
            b.iter(|| {
                let mut turtle = Turtle::new(Utc::now(), &mut rng);
                for _ in 0..ticks {
                    turtle.tick(&mut rng);
                }
                black_box(turtle)
            })
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut rng = RandEntropy::seeded(3);
    let turtle = Turtle::new(Utc::now(), &mut rng);
    let json = turtle.to_json().unwrap();

    c.bench_function("to_json", |b| b.iter(|| black_box(turtle.to_json().unwrap())));
    c.bench_function("from_json", |b| {
        b.iter(|| black_box(Turtle::from_json(&json, Utc::now(), &mut rng).unwrap()))
    });
}

criterion_group!(benches, bench_hatch, bench_ticks, bench_codec);
criterion_main!(benches);
