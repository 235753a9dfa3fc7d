use crate::coordinates::models::{Coordinate, Field, LocationInput};
use crate::coordinates::validation::{validate, ValidationError};
use serde_json::{json, Value};

fn input(body: Value) -> LocationInput {
    LocationInput::from_body(body).expect("Test body must be a JSON object.")
}

#[test]
fn accepts_valid_pair_unchanged() {
    let coordinate = validate(&input(json!({"latitude": 37.7749, "longitude": -122.4194})));

    assert_eq!(
        coordinate,
        Ok(Coordinate {
            latitude: 37.7749,
            longitude: -122.4194,
        })
    );
}

#[test]
fn accepts_zero_and_exact_bounds() {
    for (latitude, longitude) in [(0.0, 0.0), (90.0, 180.0), (-90.0, -180.0)] {
        let coordinate = validate(&input(json!({"latitude": latitude, "longitude": longitude})));
        assert_eq!(
            coordinate,
            Ok(Coordinate {
                latitude,
                longitude
            })
        );
    }
}

#[test]
fn accepts_integer_values() {
    let coordinate = validate(&input(json!({"latitude": 45, "longitude": -3})));

    assert_eq!(
        coordinate,
        Ok(Coordinate {
            latitude: 45.0,
            longitude: -3.0,
        })
    );
}

#[test]
fn missing_latitude_is_reported_with_whole_payload() {
    let body = json!({"longitude": 10});

    let error = validate(&input(body.clone()));

    assert_eq!(
        error,
        Err(ValidationError::MissingField {
            missing: vec![Field::Latitude],
            received: body,
        })
    );
}

#[test]
fn both_missing_fields_are_reported_together() {
    let body = json!({"altitude": 12});

    let error = validate(&input(body.clone()));

    assert_eq!(
        error,
        Err(ValidationError::MissingField {
            missing: vec![Field::Latitude, Field::Longitude],
            received: body,
        })
    );
}

#[test]
fn null_counts_as_missing() {
    let body = json!({"latitude": 10, "longitude": null});

    let error = validate(&input(body.clone()));

    assert_eq!(
        error,
        Err(ValidationError::MissingField {
            missing: vec![Field::Longitude],
            received: body,
        })
    );
}

#[test]
fn missing_field_wins_over_out_of_range() {
    let error = validate(&input(json!({"latitude": 500})));

    assert!(matches!(error, Err(ValidationError::MissingField { .. })));
}

#[test]
fn latitude_out_of_range_is_rejected() {
    for latitude in [json!(95), json!(90.0001), json!(-91)] {
        let error = validate(&input(json!({"latitude": latitude, "longitude": 10})));
        assert_eq!(
            error,
            Err(ValidationError::OutOfRange {
                field: Field::Latitude,
                received: latitude,
            })
        );
    }
}

#[test]
fn longitude_out_of_range_is_rejected() {
    let error = validate(&input(json!({"latitude": 10, "longitude": -180.5})));

    assert_eq!(
        error,
        Err(ValidationError::OutOfRange {
            field: Field::Longitude,
            received: json!(-180.5),
        })
    );
}

#[test]
fn latitude_is_reported_first_when_both_are_invalid() {
    let error = validate(&input(json!({"latitude": 100, "longitude": 200})));

    assert_eq!(
        error,
        Err(ValidationError::OutOfRange {
            field: Field::Latitude,
            received: json!(100),
        })
    );
}

#[test]
fn non_numeric_values_are_out_of_range() {
    for latitude in [json!("45"), json!("north"), json!(true), json!([1, 2])] {
        let error = validate(&input(json!({"latitude": latitude, "longitude": 10})));
        assert_eq!(
            error,
            Err(ValidationError::OutOfRange {
                field: Field::Latitude,
                received: latitude,
            })
        );
    }
}

#[test]
fn non_finite_values_are_out_of_range() {
    assert_eq!(
        Coordinate::new(f64::NAN, 10.0),
        Err(ValidationError::OutOfRange {
            field: Field::Latitude,
            received: json!("NaN"),
        })
    );
    assert_eq!(
        Coordinate::new(10.0, f64::INFINITY),
        Err(ValidationError::OutOfRange {
            field: Field::Longitude,
            received: json!("inf"),
        })
    );
    assert_eq!(
        Coordinate::new(95.0, f64::NEG_INFINITY),
        Err(ValidationError::OutOfRange {
            field: Field::Latitude,
            received: json!(95.0),
        })
    );
}

#[test]
fn non_object_bodies_are_not_inputs() {
    assert_eq!(LocationInput::from_body(json!([37.7, -122.4])), None);
    assert_eq!(LocationInput::from_body(json!("37.7,-122.4")), None);
}

#[test]
fn error_messages_name_the_field() {
    let missing = ValidationError::MissingField {
        missing: vec![Field::Latitude, Field::Longitude],
        received: json!({}),
    };
    let out_of_range = ValidationError::OutOfRange {
        field: Field::Latitude,
        received: json!(95),
    };

    assert_eq!(
        missing.to_string(),
        "missing required fields: latitude, longitude"
    );
    assert_eq!(out_of_range.to_string(), "invalid latitude value: 95");
}
