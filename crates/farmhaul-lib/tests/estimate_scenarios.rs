use farmhaul_lib::{
    estimate, Error, Estimator, EstimatorConfig, TripField, TripForm, TripRequest, VehicleCatalog,
};

#[test]
fn truck_fifty_km_scenario() {
    let request = TripRequest::new(50.0, 2.5, "truck").with_fuel_price(110.0);
    let estimate = estimate(&request).expect("valid request");

    assert_eq!(estimate.fuel_cost, 2750);
    assert_eq!(estimate.base_cost, 750);
    assert_eq!(estimate.trips_required, 1);
    assert_eq!(estimate.total_cost, 3500);
    assert_eq!(estimate.estimated_hours, 1.25);
    assert_eq!(estimate.estimated_hours_display, "1.3");
    assert_eq!(estimate.vehicle.id, "truck");
    assert_eq!(estimate.vehicle.capacity_tons, 10.0);
}

#[test]
fn pickup_multi_trip_scenario() {
    let request = TripRequest::new(100.0, 12.0, "pickup").with_fuel_price(100.0);
    let estimate = estimate(&request).expect("valid request");

    assert_eq!(estimate.fuel_cost, 2000);
    assert_eq!(estimate.base_cost, 1000);
    assert_eq!(estimate.trips_required, 8);
    assert_eq!(estimate.total_cost, 24000);
    assert_eq!(estimate.estimated_hours_display, "2.5");
}

#[test]
fn default_fuel_price_is_110() {
    let estimate = estimate(&TripRequest::new(50.0, 2.5, "truck")).expect("valid request");
    assert_eq!(estimate.fuel_price_per_liter, 110.0);
    assert_eq!(estimate.fuel_cost, 2750);
}

#[test]
fn weight_within_capacity_needs_one_trip() {
    for vehicle in VehicleCatalog::builtin().vehicles() {
        for fraction in [0.01, 0.25, 0.5, 0.99, 1.0] {
            let weight = vehicle.capacity_tons * fraction;
            let estimate = estimate(&TripRequest::new(30.0, weight, vehicle.id.clone()))
                .expect("valid request");
            assert_eq!(
                estimate.trips_required, 1,
                "{} carrying {weight}t",
                vehicle.id
            );
        }
    }
}

#[test]
fn trips_follow_ceiling_and_never_decrease_with_weight() {
    for vehicle in VehicleCatalog::builtin().vehicles() {
        let mut previous = 0;
        for step in 1..=120 {
            let weight = step as f64 * 0.25;
            let estimate = estimate(&TripRequest::new(20.0, weight, vehicle.id.clone()))
                .expect("valid request");
            assert_eq!(
                estimate.trips_required,
                (weight / vehicle.capacity_tons).ceil() as i64
            );
            assert!(estimate.trips_required >= previous);
            previous = estimate.trips_required;
        }
    }
}

#[test]
fn hours_depend_only_on_distance() {
    for vehicle in VehicleCatalog::builtin().vehicles() {
        for (distance, weight) in [(10.0, 0.5), (65.0, 7.0), (333.0, 40.0)] {
            let estimate = estimate(&TripRequest::new(distance, weight, vehicle.id.clone()))
                .expect("valid request");
            assert_eq!(estimate.estimated_hours, distance / 40.0);
        }
    }
}

#[test]
fn each_required_field_is_reported_when_missing() {
    let full = TripRequest::new(50.0, 2.5, "truck");

    let cases = [
        (
            TripRequest {
                distance_km: None,
                ..full.clone()
            },
            TripField::DistanceKm,
        ),
        (
            TripRequest {
                weight_tons: None,
                ..full.clone()
            },
            TripField::WeightTons,
        ),
        (
            TripRequest {
                vehicle_id: None,
                ..full.clone()
            },
            TripField::VehicleId,
        ),
    ];

    for (request, expected) in cases {
        match estimate(&request) {
            Err(Error::MissingField { field }) => assert_eq!(field, expected),
            other => panic!("expected MissingField({expected}), got {other:?}"),
        }
    }
}

#[test]
fn identical_requests_give_identical_estimates() {
    let request = TripRequest::new(73.3, 4.2, "mini_truck")
        .with_fuel_price(104.7)
        .with_route("Nashik", "Pune");
    let first = estimate(&request).expect("valid request");
    let second = estimate(&request).expect("valid request");
    assert_eq!(first, second);
    assert_eq!(
        first.estimated_hours.to_bits(),
        second.estimated_hours.to_bits()
    );
}

#[test]
fn breakdown_is_rounded_per_field() {
    // fuel 7 * 2 / 6 * 100.5 = 234.5 and base 7 * 12 = 84; one trip
    let request = TripRequest::new(7.0, 1.0, "mini_truck").with_fuel_price(100.5);
    let single = estimate(&request).expect("valid request");
    assert_eq!(single.base_cost, 84);
    assert_eq!(single.fuel_cost, 235);
    assert_eq!(single.total_cost, 319);

    // two trips: the total doubles the raw sum, not the rounded parts
    let request = TripRequest::new(7.0, 4.0, "mini_truck").with_fuel_price(100.5);
    let double = estimate(&request).expect("valid request");
    assert_eq!(double.trips_required, 2);
    assert_eq!(double.total_cost, 637);
    assert_ne!(
        double.total_cost,
        (double.base_cost + double.fuel_cost) * double.trips_required
    );
}

#[test]
fn negative_inputs_are_accepted() {
    let request = TripRequest::new(-10.0, 1.0, "truck").with_fuel_price(-5.0);
    let estimate = estimate(&request).expect("magnitudes are not validated");
    assert_eq!(estimate.base_cost, -150);
    assert_eq!(estimate.estimated_hours_display, "-0.3");
}

#[test]
fn unknown_vehicle_suggests_alternatives() {
    let err = estimate(&TripRequest::new(10.0, 1.0, "pikup")).expect_err("unknown id");
    assert!(err.to_string().contains("Did you mean 'pickup'?"), "{err}");
}

#[test]
fn form_flows_through_estimator() {
    let form = TripForm {
        distance: "100".to_string(),
        weight: "12".to_string(),
        vehicle_type: "pickup".to_string(),
        fuel_price: "100".to_string(),
        ..TripForm::default()
    };
    let request = form.to_request().expect("form parses");
    let estimate = estimate(&request).expect("valid request");
    assert_eq!(estimate.total_cost, 24000);
    assert!(estimate.from_location.is_none());
}

#[test]
fn empty_form_reports_distance_first() {
    let err = TripForm::default()
        .to_request()
        .expect_err("nothing filled in");
    assert!(matches!(
        err,
        Error::MissingField {
            field: TripField::DistanceKm
        }
    ));
}

#[test]
fn blank_distance_is_missing_even_when_weight_is_garbage() {
    let form = TripForm {
        weight: "abc".to_string(),
        vehicle_type: "truck".to_string(),
        ..TripForm::default()
    };
    let err = form.to_request().expect_err("distance blank");
    assert_eq!(err.to_string(), "missing required field: distanceKm");
}

#[test]
fn custom_speed_changes_only_hours() {
    let config = EstimatorConfig {
        average_speed_kmh: 50.0,
        ..EstimatorConfig::default()
    };
    let estimator = Estimator::new(VehicleCatalog::builtin(), config);
    let request = TripRequest::new(50.0, 2.5, "truck");
    let custom = estimator.estimate(&request).expect("valid request");
    let baseline = estimate(&request).expect("valid request");

    assert_eq!(custom.estimated_hours_display, "1.0");
    assert_eq!(custom.total_cost, baseline.total_cost);
}

#[test]
fn estimate_serializes_with_camel_case_keys() {
    let request = TripRequest::new(50.0, 2.5, "truck").with_route("Nashik", "Pune");
    let estimate = estimate(&request).expect("valid request");
    let value = serde_json::to_value(&estimate).expect("serializes");

    assert_eq!(value["totalCost"], 3500);
    assert_eq!(value["tripsRequired"], 1);
    assert_eq!(value["estimatedHoursDisplay"], "1.3");
    assert_eq!(value["vehicle"]["displayName"], "Truck");
    assert_eq!(value["vehicle"]["fuelEfficiencyKmPerLiter"], 4.0);
    assert_eq!(value["fromLocation"], "Nashik");
}
