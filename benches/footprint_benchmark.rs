use carbon_tracker::models::{ActivityInput, CookingType, FoodType, Shopping, TransportType};
use carbon_tracker::services::tips::select_tips;
use carbon_tracker::services::{classify, compute, Level, SystemRandomSource};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_footprint(c: &mut Criterion) {
    let day = ActivityInput {
        transport_type: TransportType::ElectricCar,
        transport_unit_km: 42.7,
        electricity_unit_kwh: 9.3,
        cooking_type: CookingType::Induction,
        food_type: FoodType::Vegetarian,
        shopping: Shopping::Electronics,
    };
    let rng = SystemRandomSource::new();

    let mut group = c.benchmark_group("footprint");

    group.bench_function("compute", |b| b.iter(|| compute(black_box(&day))));

    group.bench_function("classify_with_system_rng", |b| {
        b.iter(|| classify(black_box(57.6), &rng))
    });

    group.bench_function("select_tips", |b| {
        b.iter(|| select_tips(black_box(Level::Low), &rng))
    });

    group.finish();
}

criterion_group!(benches, benchmark_footprint);
criterion_main!(benches);
