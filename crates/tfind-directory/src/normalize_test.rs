use serde_json::json;

use super::*;

const VENDOR: &str = "https://www.cineplex.com";

fn theatre(name: &str, slug: &str, distance: f64) -> Value {
    json!({
        "name": name,
        "urlSlug": slug,
        "address1": "259 Richmond Street West",
        "city": "Toronto",
        "provinceCode": "ON",
        "postalCode": "M5V 3M6",
        "latitude": 43.649,
        "longitude": -79.391,
        "distance": distance
    })
}

fn body(entries: &[Value]) -> String {
    json!({ "data": entries }).to_string()
}

#[test]
fn builds_record_from_complete_entry() {
    let catalog = parse_catalog(
        &body(&[theatre("Scotiabank Theatre Toronto", "scotiabank-theatre-toronto", 1.5)]),
        VENDOR,
        50_000.0,
    );

    assert_eq!(catalog.total_entries, 1);
    assert!(catalog.substitutions.is_empty());
    let record = &catalog.theaters[0];
    assert_eq!(record.name, "Scotiabank Theatre Toronto");
    assert_eq!(
        record.address,
        "259 Richmond Street West, Toronto, ON M5V 3M6"
    );
    assert_eq!(record.coordinate, Coordinate::new(43.649, -79.391));
    assert_eq!(record.url_slug, "scotiabank-theatre-toronto");
    assert!((record.distance - 1.5).abs() < f64::EPSILON);
    assert_eq!(
        record.url,
        "https://www.cineplex.com/Theatre/scotiabank-theatre-toronto"
    );
}

#[test]
fn filters_by_doubled_distance_and_preserves_order() {
    let catalog = parse_catalog(
        &body(&[
            theatre("A", "a", 10.0),
            theatre("Too far", "far", 30.0),
            theatre("Boundary", "edge", 25.0),
            theatre("B", "b", 24.0),
        ]),
        VENDOR,
        50.0,
    );

    let names: Vec<&str> = catalog.theaters.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(catalog.total_entries, 4);
}

#[test]
fn missing_fields_default_without_dropping_record() {
    let catalog = parse_catalog(
        &body(&[json!({ "name": "Mystery Cinema", "distance": 3 })]),
        VENDOR,
        50_000.0,
    );

    assert_eq!(catalog.theaters.len(), 1);
    let record = &catalog.theaters[0];
    assert_eq!(record.name, "Mystery Cinema");
    assert_eq!(record.address, ", ,  ");
    assert_eq!(record.coordinate, Coordinate::new(0.0, 0.0));
    assert_eq!(record.url, "https://www.cineplex.com/Theatre/");

    let fields: Vec<&str> = catalog.substitutions.iter().map(|s| s.field).collect();
    assert_eq!(
        fields,
        vec![
            "urlSlug",
            "address1",
            "city",
            "provinceCode",
            "postalCode",
            "latitude",
            "longitude"
        ]
    );
    assert!(catalog.substitutions.iter().all(|s| s.index == 0));
}

#[test]
fn missing_distance_defaults_to_zero_and_is_kept() {
    let mut entry = theatre("No Distance", "no-distance", 0.0);
    entry.as_object_mut().unwrap().remove("distance");

    let catalog = parse_catalog(&body(&[entry]), VENDOR, 50_000.0);

    assert_eq!(catalog.theaters.len(), 1);
    assert_eq!(
        catalog.substitutions,
        vec![FieldSubstitution {
            index: 0,
            field: "distance"
        }]
    );
}

#[test]
fn coerces_numeric_strings_and_numbers() {
    let entry = json!({
        "name": 42,
        "urlSlug": "coerced",
        "address1": "1 Main St",
        "city": "Ottawa",
        "provinceCode": "ON",
        "postalCode": "K1A 0A6",
        "latitude": "45.42",
        "longitude": " -75.69 ",
        "distance": "2.5"
    });

    let catalog = parse_catalog(&body(&[entry]), VENDOR, 50_000.0);

    assert!(catalog.substitutions.is_empty());
    let record = &catalog.theaters[0];
    assert_eq!(record.name, "42");
    assert_eq!(record.coordinate, Coordinate::new(45.42, -75.69));
    assert!((record.distance - 2.5).abs() < f64::EPSILON);
}

#[test]
fn null_and_object_fields_are_substituted() {
    let mut entry = theatre("Odd Fields", "odd", 1.0);
    entry["city"] = Value::Null;
    entry["latitude"] = json!({ "deg": 43 });

    let catalog = parse_catalog(&body(&[entry]), VENDOR, 50_000.0);

    let record = &catalog.theaters[0];
    assert_eq!(record.address, "259 Richmond Street West, , ON M5V 3M6");
    assert!(record.coordinate.latitude.abs() < f64::EPSILON);
    let fields: Vec<&str> = catalog.substitutions.iter().map(|s| s.field).collect();
    assert_eq!(fields, vec!["city", "latitude"]);
}

#[test]
fn substitutions_from_filtered_entries_are_not_reported() {
    let entry = json!({ "distance": 40_000 });
    let catalog = parse_catalog(&body(&[entry]), VENDOR, 50_000.0);
    assert!(catalog.theaters.is_empty());
    assert!(catalog.substitutions.is_empty());
}

#[test]
fn fixed_team_slugs_resolve_to_team_pages() {
    let catalog = parse_catalog(
        &body(&[
            theatre("Sixers", "76ers", 1.0),
            theatre("Blazers", "trail blazers", 1.0),
        ]),
        VENDOR,
        50_000.0,
    );
    assert_eq!(catalog.theaters[0].url, "https://www.nba.com/teams/sixers");
    assert_eq!(catalog.theaters[1].url, "https://www.nba.com/teams/blazers");
}

#[test]
fn non_json_body_yields_empty_catalog() {
    let catalog = parse_catalog("<html>maintenance</html>", VENDOR, 50_000.0);
    assert!(catalog.theaters.is_empty());
    assert_eq!(catalog.total_entries, 0);
}

#[test]
fn body_without_data_array_yields_empty_catalog() {
    let catalog = parse_catalog(r#"{"data": {"name": "x"}}"#, VENDOR, 50_000.0);
    assert!(catalog.theaters.is_empty());

    let catalog = parse_catalog(r#"{"theatres": []}"#, VENDOR, 50_000.0);
    assert!(catalog.theaters.is_empty());
}

#[test]
fn empty_data_array_yields_empty_catalog() {
    let catalog = parse_catalog(&body(&[]), VENDOR, 50_000.0);
    assert!(catalog.theaters.is_empty());
    assert_eq!(catalog.total_entries, 0);
}
