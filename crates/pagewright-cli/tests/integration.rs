//! Integration tests for the pagewright CLI
//!
//! Drive the generate and check commands against files in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use pagewright_cli::{check_command, generate_command, OutputFormat};
use serde_json::Value;
use tempfile::TempDir;

const GLOWC: &str = r#"{
  "product_name": "GlowC Serum",
  "concentration": "10% Vitamin C",
  "skin_type": ["Oily", "Combination"],
  "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
  "benefits": ["Brightening", "Hydration"],
  "how_to_use": "Apply 3-4 drops",
  "side_effects": "mild tingling, redness",
  "price_in_inr": 899
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_generate_writes_three_pages() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "product.json", GLOWC);
    let out = dir.path().join("output");

    let report = generate_command(&input, Some(&out), None, None).unwrap();

    assert_eq!(report.product_name, "GlowC Serum");
    assert_eq!(report.locations.len(), 3);
    for name in ["faq.json", "product_page.json", "comparison_page.json"] {
        assert!(out.join(name).exists(), "{} missing", name);
    }

    let product = read_json(&out.join("product_page.json"));
    assert_eq!(product["raw"]["price_in_inr"], 899);
}

#[test]
fn test_generate_with_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "product.json", GLOWC);
    let rival = write_file(
        &dir,
        "rival.json",
        r#"{"name": "Rival Drops", "price_in_inr": 650}"#,
    );
    let out = dir.path().join("site");
    let config = write_file(
        &dir,
        "pagewright.toml",
        &format!(
            "[output]\ndir = {:?}\nfaq = \"questions.json\"\n\n[phrases]\nproduct_noun = \"essence\"\n\n[comparison]\npath = {:?}\n",
            out.display().to_string(),
            rival.display().to_string()
        ),
    );

    generate_command(&input, None, None, Some(&config)).unwrap();

    assert!(out.join("questions.json").exists());
    assert!(!out.join("faq.json").exists());

    let product = read_json(&out.join("product_page.json"));
    assert!(product["short_description"]
        .as_str()
        .unwrap()
        .contains("essence"));

    let comparison = read_json(&out.join("comparison_page.json"));
    assert_eq!(comparison["product_B"]["name"], "Rival Drops");
}

#[test]
fn test_flags_override_config() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "product.json", GLOWC);
    let config = write_file(&dir, "custom.toml", "[output]\ndir = \"never-used\"\n");
    let out = dir.path().join("flag-dir");

    generate_command(&input, Some(&out), None, Some(&config)).unwrap();

    assert!(out.join("faq.json").exists());
    assert!(!dir.path().join("never-used").exists());
}

#[test]
fn test_colliding_output_names_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "product.json", GLOWC);
    let config = write_file(
        &dir,
        "custom.toml",
        "[output]\nfaq = \"pages.json\"\nproduct = \"pages.json\"\n",
    );
    let out = dir.path().join("output");

    let err = generate_command(&input, Some(&out), None, Some(&config)).unwrap_err();

    assert!(format!("{:#}", err).contains("pages.json"));
    assert!(!out.exists());
}

#[test]
fn test_generate_invalid_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "product.json",
        r#"{"product_name": "Half Serum", "price_in_inr": "cheap"}"#,
    );
    let out = dir.path().join("output");

    let err = generate_command(&input, Some(&out), None, None).unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("Missing required fields"));
    assert!(message.contains("concentration"));
    assert!(!out.exists());
}

#[test]
fn test_generate_missing_input() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("output");

    let result = generate_command(&dir.path().join("absent.json"), Some(&out), None, None);

    assert!(result.is_err());
    assert!(!out.exists());
}

#[test]
fn test_generate_missing_config() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "product.json", GLOWC);

    let result = generate_command(
        &input,
        Some(&dir.path().join("output")),
        None,
        Some(&dir.path().join("absent.toml")),
    );

    assert!(result.is_err());
}

#[test]
fn test_check_returns_record() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "product.json", GLOWC);

    let record = check_command(&input, OutputFormat::Json).unwrap();

    assert_eq!(record.side_effects, vec!["mild tingling", "redness"]);
    assert_eq!(record.price_in_inr, 899);
}

#[test]
fn test_check_reports_coercion_error() {
    let dir = TempDir::new().unwrap();
    let mut value: Value = serde_json::from_str(GLOWC).unwrap();
    value["price_in_inr"] = Value::String("eight hundred".to_string());
    let input = write_file(&dir, "product.json", &value.to_string());

    let err = check_command(&input, OutputFormat::Text).unwrap_err();

    assert!(format!("{:#}", err).contains("price_in_inr"));
}
