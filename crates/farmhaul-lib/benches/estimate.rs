use criterion::{criterion_group, criterion_main, Criterion};
use farmhaul_lib::{Estimator, TripForm, TripRequest, VehicleCatalog};
use once_cell::sync::Lazy;
use std::hint::black_box;

static SINGLE_TRIP: Lazy<TripRequest> =
    Lazy::new(|| TripRequest::new(50.0, 2.5, "truck").with_fuel_price(110.0));
static MULTI_TRIP: Lazy<TripRequest> =
    Lazy::new(|| TripRequest::new(100.0, 12.0, "pickup").with_fuel_price(100.0));
static FORM: Lazy<TripForm> = Lazy::new(|| TripForm {
    from_location: "Nashik".to_string(),
    to_location: "Pune".to_string(),
    distance: "210".to_string(),
    weight: "7.5".to_string(),
    vehicle_type: "mini_truck".to_string(),
    ..TripForm::default()
});

fn benchmark_estimate(c: &mut Criterion) {
    let estimator = Estimator::default();

    c.bench_function("estimate_truck_single_trip", |b| {
        let request = &*SINGLE_TRIP;
        b.iter(|| {
            let estimate = estimator.estimate(request).expect("valid request");
            black_box(estimate.total_cost)
        });
    });

    c.bench_function("estimate_pickup_multi_trip", |b| {
        let request = &*MULTI_TRIP;
        b.iter(|| {
            let estimate = estimator.estimate(request).expect("valid request");
            black_box(estimate.total_cost)
        });
    });

    c.bench_function("estimate_from_form", |b| {
        let form = &*FORM;
        b.iter(|| {
            let request = form.to_request().expect("form parses");
            let estimate = estimator.estimate(&request).expect("valid request");
            black_box(estimate.trips_required)
        });
    });

    c.bench_function("catalog_suggest_typo", |b| {
        let catalog = VehicleCatalog::builtin();
        b.iter(|| black_box(catalog.suggest(black_box("tractr"), 3)));
    });
}

criterion_group!(benches, benchmark_estimate);
criterion_main!(benches);
