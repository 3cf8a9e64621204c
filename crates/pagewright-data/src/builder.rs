//! Canonical record builder - turns raw key-value input into a `ProductRecord`.
//!
//! Every accepted input shape is listed in [`FIELD_RULES`]. No other part of
//! pagewright coerces raw values.
//!
//! | Key               | Shape | Accepted                                      |
//! |-------------------|-------|-----------------------------------------------|
//! | `product_name`    | Text  | string or number                              |
//! | `concentration`   | Text  | string or number                              |
//! | `skin_type`       | List  | array of strings, or comma-delimited string   |
//! | `key_ingredients` | List  | array of strings, or comma-delimited string   |
//! | `benefits`        | List  | array of strings, or comma-delimited string   |
//! | `how_to_use`      | Text  | string or number                              |
//! | `side_effects`    | List  | as above, may normalize to an empty list      |
//! | `price_in_inr`    | Price | non-negative integer, or numeric string       |

use pagewright_model::ProductRecord;
use serde_json::Value;
use tracing::debug;

use crate::error::{RecordError, Result};
use crate::RawRecord;

/// How a raw value is read into a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Trimmed string
    Text,
    /// Ordered list of trimmed, non-empty strings
    List,
    /// Non-negative integer amount
    Price,
}

/// One row of the coercion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Key as it appears in raw input
    pub key: &'static str,
    /// Expected shape
    pub shape: FieldShape,
    /// Whether a blank value is acceptable
    pub allow_empty: bool,
}

impl FieldRule {
    const fn required(key: &'static str, shape: FieldShape) -> Self {
        Self {
            key,
            shape,
            allow_empty: false,
        }
    }
}

const PRODUCT_NAME: FieldRule = FieldRule::required("product_name", FieldShape::Text);
const CONCENTRATION: FieldRule = FieldRule::required("concentration", FieldShape::Text);
const SKIN_TYPE: FieldRule = FieldRule::required("skin_type", FieldShape::List);
const KEY_INGREDIENTS: FieldRule = FieldRule::required("key_ingredients", FieldShape::List);
const BENEFITS: FieldRule = FieldRule::required("benefits", FieldShape::List);
const HOW_TO_USE: FieldRule = FieldRule::required("how_to_use", FieldShape::Text);
const SIDE_EFFECTS: FieldRule = FieldRule {
    key: "side_effects",
    shape: FieldShape::List,
    allow_empty: true,
};
const PRICE_IN_INR: FieldRule = FieldRule::required("price_in_inr", FieldShape::Price);

/// The coercion table, in reporting order
pub const FIELD_RULES: [FieldRule; 8] = [
    PRODUCT_NAME,
    CONCENTRATION,
    SKIN_TYPE,
    KEY_INGREDIENTS,
    BENEFITS,
    HOW_TO_USE,
    SIDE_EFFECTS,
    PRICE_IN_INR,
];

/// Builds canonical product records from raw input
pub struct RecordBuilder;

impl RecordBuilder {
    /// Validate and normalize a raw record
    ///
    /// Missing fields are reported before coercion failures, and all of them
    /// at once. Of several coercion failures only the first (in table order)
    /// is reported.
    pub fn build(raw: &RawRecord) -> Result<ProductRecord> {
        for key in raw.keys() {
            if !FIELD_RULES.iter().any(|rule| rule.key == key) {
                debug!(key = %key, "ignoring unknown input field");
            }
        }

        // Struct fields are evaluated in table order.
        let mut fields = Fields::new(raw);
        let record = ProductRecord {
            name: fields.text(PRODUCT_NAME),
            concentration: fields.text(CONCENTRATION),
            skin_type: fields.list(SKIN_TYPE),
            ingredients: fields.list(KEY_INGREDIENTS),
            benefits: fields.list(BENEFITS),
            usage: fields.text(HOW_TO_USE),
            side_effects: fields.list(SIDE_EFFECTS),
            price_in_inr: fields.price(PRICE_IN_INR),
        };
        fields.finish(record)
    }
}

/// Reads raw values rule by rule, collecting every failure
///
/// A field that fails yields its type's default; `finish` then discards the
/// partially built record.
struct Fields<'a> {
    raw: &'a RawRecord,
    missing: Vec<String>,
    first_error: Option<RecordError>,
}

impl<'a> Fields<'a> {
    fn new(raw: &'a RawRecord) -> Self {
        Self {
            raw,
            missing: Vec::new(),
            first_error: None,
        }
    }

    fn read<T: Default>(
        &mut self,
        rule: FieldRule,
        coerce: fn(&str, &Value) -> Result<T>,
        is_blank: fn(&T) -> bool,
    ) -> T {
        let value = match self.raw.get(rule.key) {
            None | Some(Value::Null) => {
                self.missing.push(rule.key.to_string());
                return T::default();
            }
            Some(value) => value,
        };

        match coerce(rule.key, value) {
            Ok(normalized) if is_blank(&normalized) && !rule.allow_empty => {
                self.missing.push(rule.key.to_string());
                T::default()
            }
            Ok(normalized) => normalized,
            Err(err) => {
                self.first_error.get_or_insert(err);
                T::default()
            }
        }
    }

    fn text(&mut self, rule: FieldRule) -> String {
        self.read(rule, coerce_text, String::is_empty)
    }

    fn list(&mut self, rule: FieldRule) -> Vec<String> {
        self.read(rule, coerce_list, Vec::is_empty)
    }

    fn price(&mut self, rule: FieldRule) -> u64 {
        self.read(rule, coerce_price, |_| false)
    }

    fn finish(self, record: ProductRecord) -> Result<ProductRecord> {
        if !self.missing.is_empty() {
            return Err(RecordError::MissingFields(self.missing));
        }
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(record),
        }
    }
}

fn coerce_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(RecordError::coercion(key, other, "a string")),
    }
}

fn coerce_list(key: &str, value: &Value) -> Result<Vec<String>> {
    match value {
        Value::String(s) => Ok(split_delimited(s)),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => {
                        let trimmed = s.trim();
                        if !trimmed.is_empty() {
                            out.push(trimmed.to_string());
                        }
                    }
                    other => return Err(RecordError::coercion(key, other, "a list of strings")),
                }
            }
            Ok(out)
        }
        other => Err(RecordError::coercion(key, other, "a list of strings")),
    }
}

fn coerce_price(key: &str, value: &Value) -> Result<u64> {
    const EXPECTED: &str = "a non-negative integer";

    match value {
        Value::Number(n) => {
            if let Some(amount) = n.as_u64() {
                return Ok(amount);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                    Ok(f as u64)
                }
                _ => Err(RecordError::coercion(key, value, EXPECTED)),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| RecordError::coercion(key, value, EXPECTED)),
        other => Err(RecordError::coercion(key, other, EXPECTED)),
    }
}

/// Split a comma-delimited string into trimmed, non-empty items
pub fn split_delimited(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a side-effect value (string or list) into a list
///
/// Applying this to its own output yields the same list.
pub fn normalize_side_effects(value: &Value) -> Result<Vec<String>> {
    coerce_list("side_effects", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    fn glowc() -> Value {
        json!({
            "product_name": "GlowC Serum",
            "concentration": "10% Vitamin C",
            "skin_type": ["Oily", "Combination"],
            "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
            "benefits": ["Brightening", "Hydration"],
            "how_to_use": "Apply 3-4 drops",
            "side_effects": "mild tingling, redness",
            "price_in_inr": 899
        })
    }

    #[test]
    fn test_build_full_record() {
        let record = RecordBuilder::build(&raw(glowc())).unwrap();

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
    fn test_missing_fields_reported_together() {
        let mut input = raw(glowc());
        input.remove("benefits");
        input.remove("price_in_inr");
        input.remove("product_name");

        let err = RecordBuilder::build(&input).unwrap_err();
        assert_eq!(
            err.missing_fields().unwrap(),
            ["product_name", "benefits", "price_in_inr"]
        );
    }

    #[test]
    fn test_empty_input_reports_every_field() {
        let err = RecordBuilder::build(&RawRecord::new()).unwrap_err();
        let missing = err.missing_fields().unwrap();
        assert_eq!(missing.len(), FIELD_RULES.len());
    }

    #[test]
    fn test_null_and_blank_count_as_missing() {
        let mut input = raw(glowc());
        input.insert("concentration".to_string(), Value::Null);
        input.insert("skin_type".to_string(), json!([]));
        input.insert("how_to_use".to_string(), json!("   "));

        let err = RecordBuilder::build(&input).unwrap_err();
        assert_eq!(
            err.missing_fields().unwrap(),
            ["concentration", "skin_type", "how_to_use"]
        );
    }

    #[test]
    fn test_empty_side_effects_allowed() {
        let mut input = raw(glowc());
        input.insert("side_effects".to_string(), json!(""));

        let record = RecordBuilder::build(&input).unwrap();
        assert!(record.side_effects.is_empty());
    }

    #[test]
    fn test_missing_reported_before_coercion() {
        let mut input = raw(glowc());
        input.insert("price_in_inr".to_string(), json!("cheap"));
        input.remove("benefits");

        let err = RecordBuilder::build(&input).unwrap_err();
        assert_eq!(err.missing_fields().unwrap(), ["benefits"]);
    }

    #[test]
    fn test_price_coercion() {
        for (input, expected) in [
            (json!(899), 899),
            (json!("899"), 899),
            (json!(" 1200 "), 1200),
            (json!(450.0), 450),
            (json!(0), 0),
        ] {
            let mut record = raw(glowc());
            record.insert("price_in_inr".to_string(), input);
            assert_eq!(RecordBuilder::build(&record).unwrap().price_in_inr, expected);
        }
    }

    #[test]
    fn test_price_coercion_failures() {
        let overflow: Value = serde_json::from_str("18446744073709551616").unwrap();
        for input in [
            json!("cheap"),
            json!(-5),
            json!(9.99),
            json!(true),
            json!([899]),
            overflow,
            json!("18446744073709551616"),
        ] {
            let mut record = raw(glowc());
            record.insert("price_in_inr".to_string(), input);

            match RecordBuilder::build(&record).unwrap_err() {
                RecordError::TypeCoercion { field, .. } => assert_eq!(field, "price_in_inr"),
                other => panic!("expected coercion error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_string_list_item_rejected() {
        let mut input = raw(glowc());
        input.insert("key_ingredients".to_string(), json!(["Vitamin C", 3]));

        let err = RecordBuilder::build(&input).unwrap_err();
        assert!(matches!(err, RecordError::TypeCoercion { ref field, .. } if field == "key_ingredients"));
    }

    #[test]
    fn test_list_fields_accept_delimited_string() {
        let mut input = raw(glowc());
        input.insert("skin_type".to_string(), json!("Oily, Combination"));

        let record = RecordBuilder::build(&input).unwrap();
        assert_eq!(record.skin_type, vec!["Oily", "Combination"]);
    }

    #[test]
    fn test_list_items_trimmed() {
        let mut input = raw(glowc());
        input.insert("benefits".to_string(), json!([" Brightening ", "", "Hydration"]));

        let record = RecordBuilder::build(&input).unwrap();
        assert_eq!(record.benefits, vec!["Brightening", "Hydration"]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = raw(glowc());
        input.insert("sku".to_string(), json!("GC-10"));

        assert!(RecordBuilder::build(&input).is_ok());
    }

    #[test]
    fn test_side_effect_normalization_idempotent() {
        let from_string = normalize_side_effects(&json!("mild tingling, redness")).unwrap();
        let from_list = normalize_side_effects(&json!(["mild tingling", "redness"])).unwrap();
        assert_eq!(from_string, from_list);

        let again = normalize_side_effects(&json!(from_list.clone())).unwrap();
        assert_eq!(again, from_list);
    }

    #[test]
    fn test_first_coercion_error_in_table_order() {
        let mut input = raw(glowc());
        input.insert("price_in_inr".to_string(), json!("cheap"));
        input.insert("skin_type".to_string(), json!(42));

        match RecordBuilder::build(&input).unwrap_err() {
            RecordError::TypeCoercion { field, .. } => assert_eq!(field, "skin_type"),
            other => panic!("expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn test_rules_cover_every_shape() {
        for shape in [FieldShape::Text, FieldShape::List, FieldShape::Price] {
            assert!(FIELD_RULES.iter().any(|rule| rule.shape == shape));
        }
    }

    #[test]
    fn test_split_delimited() {
        assert_eq!(split_delimited("a, b,,c ,"), vec!["a", "b", "c"]);
        assert!(split_delimited("  ").is_empty());
    }
}
