//! Comparison point derivation
//!
//! Produces one point per [`ComparisonAttribute`], always in the same order.
//! The product side is read from required record fields and is never empty.
//! The counterpart side goes through [`Counterpart`], which reads the loosely
//! shaped comparison record best-effort and falls back to the phrasebook
//! whenever a value is absent, blank, or of an unexpected type.

use pagewright_data::split_delimited;
use pagewright_model::{
    ComparisonAttribute, ComparisonPoint, ComparisonRecord, PointValue, ProductRecord,
};
use serde_json::Value;
use tracing::warn;

use crate::phrasebook::Phrasebook;
use crate::text::{as_sentence, capitalize, join_natural, lowercase_all};

/// Build the fixed comparison point sequence
pub fn comparison_points(
    product: &ProductRecord,
    counterpart: &ComparisonRecord,
    phrases: &Phrasebook,
) -> Vec<ComparisonPoint> {
    let counterpart = Counterpart::new(counterpart, phrases);

    ComparisonAttribute::ALL
        .iter()
        .map(|&attribute| ComparisonPoint {
            attribute,
            product_a: subject_value(attribute, product, phrases),
            product_b: counterpart.value(attribute),
        })
        .collect()
}

/// Value for the primary product
fn subject_value(
    attribute: ComparisonAttribute,
    product: &ProductRecord,
    phrases: &Phrasebook,
) -> PointValue {
    match attribute {
        ComparisonAttribute::TargetConcern => PointValue::Text(concern(&product.benefits)),
        ComparisonAttribute::SkinTypeFocus => PointValue::Text(format!(
            "Designed for {} skin.",
            join_natural(&product.skin_type)
        )),
        ComparisonAttribute::KeyIngredients => PointValue::Text(product.ingredients.join(", ")),
        ComparisonAttribute::Price => PointValue::Amount(product.price_in_inr),
        ComparisonAttribute::TextureFormat => PointValue::Text(format!(
            "{} format with {}.",
            capitalize(&phrases.product_noun),
            product.concentration
        )),
    }
}

/// Per-attribute access to a comparison record with defaults
pub struct Counterpart<'a> {
    record: &'a ComparisonRecord,
    phrases: &'a Phrasebook,
}

impl<'a> Counterpart<'a> {
    pub fn new(record: &'a ComparisonRecord, phrases: &'a Phrasebook) -> Self {
        Self { record, phrases }
    }

    /// Value for `attribute`, or the phrasebook default if the record has none
    pub fn value(&self, attribute: ComparisonAttribute) -> PointValue {
        self.supplied(attribute).unwrap_or_else(|| {
            warn!(
                attribute = attribute.label(),
                "comparison record has no value, using default"
            );
            PointValue::text(self.default_for(attribute))
        })
    }

    /// The record's own value, if present, non-blank and of a usable type
    pub fn supplied(&self, attribute: ComparisonAttribute) -> Option<PointValue> {
        match attribute {
            ComparisonAttribute::TargetConcern => self
                .list(ComparisonRecord::BENEFITS)
                .map(|benefits| PointValue::Text(concern(&benefits))),
            ComparisonAttribute::SkinTypeFocus => self
                .text(ComparisonRecord::SKIN_TYPE_DESCRIPTION)
                .map(PointValue::text),
            ComparisonAttribute::KeyIngredients => self
                .list(ComparisonRecord::KEY_INGREDIENTS)
                .map(|items| PointValue::Text(items.join(", "))),
            ComparisonAttribute::Price => self
                .price(ComparisonRecord::PRICE_IN_INR)
                .map(PointValue::Amount),
            ComparisonAttribute::TextureFormat => {
                self.text(ComparisonRecord::TEXTURE).map(PointValue::text)
            }
        }
    }

    fn text(&self, key: &str) -> Option<&'a str> {
        self.record
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// A list, or a comma-delimited string; non-string items are skipped
    fn list(&self, key: &str) -> Option<Vec<String>> {
        let items = match self.record.get(key)? {
            Value::String(s) => split_delimited(s),
            Value::Array(values) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => return None,
        };
        Some(items).filter(|items| !items.is_empty())
    }

    /// A whole, non-negative amount given as a number or numeric string
    fn price(&self, key: &str) -> Option<u64> {
        match self.record.get(key)? {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .filter(|f| *f < u64::MAX as f64)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Phrasebook default for `attribute`
    pub fn default_for(&self, attribute: ComparisonAttribute) -> &'a str {
        let phrases = self.phrases;
        match attribute {
            ComparisonAttribute::TargetConcern => &phrases.comparison_target_concern,
            ComparisonAttribute::SkinTypeFocus => &phrases.comparison_skin_type,
            ComparisonAttribute::KeyIngredients => &phrases.comparison_ingredients,
            ComparisonAttribute::Price => &phrases.comparison_price,
            ComparisonAttribute::TextureFormat => &phrases.comparison_texture,
        }
    }
}

/// "Brightening and hydration."
fn concern(benefits: &[String]) -> String {
    as_sentence(&capitalize(&join_natural(&lowercase_all(benefits))))
}
