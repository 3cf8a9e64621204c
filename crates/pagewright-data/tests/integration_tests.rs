//! Integration tests for pagewright-data

use std::path::PathBuf;

use pagewright_data::{load_product, JsonFileSource, RecordError, RecordSource};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_product() {
    let source = JsonFileSource::new(fixture_path("product.json")).expect("Failed to open fixture");
    let record = load_product(&source).expect("Failed to build record");

    assert_eq!(record.name, "GlowC Serum");
    assert_eq!(record.concentration, "10% Vitamin C");
    assert_eq!(record.skin_type, vec!["Oily", "Combination"]);
    assert_eq!(record.ingredients, vec!["Vitamin C", "Hyaluronic Acid"]);
    assert_eq!(record.benefits, vec!["Brightening", "Hydration"]);
    assert_eq!(record.usage, "Apply 3-4 drops");
    assert_eq!(record.side_effects, vec!["mild tingling", "redness"]);
    assert_eq!(record.price_in_inr, 899);
}

#[test]
fn test_incomplete_fixture_lists_every_missing_field() {
    let source = JsonFileSource::new(fixture_path("incomplete.json")).unwrap();
    let err = load_product(&source).unwrap_err();

    assert_eq!(
        err.missing_fields().expect("expected missing-field error"),
        ["concentration", "key_ingredients", "benefits", "price_in_inr"]
    );
}

#[test]
fn test_build_is_deterministic() {
    let source = JsonFileSource::new(fixture_path("product.json")).unwrap();
    let first = load_product(&source).unwrap();
    let second = load_product(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_record_fields_never_blank() {
    let source = JsonFileSource::new(fixture_path("product.json")).unwrap();
    let record = load_product(&source).unwrap();

    assert!(!record.name.is_empty());
    assert!(!record.concentration.is_empty());
    assert!(!record.usage.is_empty());
    assert!(record.skin_type.iter().all(|s| !s.is_empty()));
    assert!(record.ingredients.iter().all(|s| !s.is_empty()));
    assert!(record.benefits.iter().all(|s| !s.is_empty()));
}

#[test]
fn test_source_describes_path() {
    let path = fixture_path("product.json");
    let source = JsonFileSource::new(&path).unwrap();
    assert_eq!(source.describe(), path.display().to_string());
}

#[test]
fn test_missing_file() {
    let result = JsonFileSource::new(fixture_path("does-not-exist.json"));
    assert!(matches!(result, Err(RecordError::FileNotFound(_))));
}
