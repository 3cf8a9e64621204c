//! Narrative content blocks and comparison points

use serde::{Deserialize, Serialize};

/// Narrative copy fragments derived from a product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlocks {
    pub benefits: String,
    pub usage: String,
    pub safety: String,
    pub ingredients: String,
}

/// Attributes compared between two products
///
/// Declaration order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonAttribute {
    #[serde(rename = "Target concern")]
    TargetConcern,
    #[serde(rename = "Skin type focus")]
    SkinTypeFocus,
    #[serde(rename = "Key ingredients")]
    KeyIngredients,
    #[serde(rename = "Price (₹)")]
    Price,
    #[serde(rename = "Texture / format")]
    TextureFormat,
}

impl ComparisonAttribute {
    /// All attributes, in presentation order
    pub const ALL: [ComparisonAttribute; 5] = [
        ComparisonAttribute::TargetConcern,
        ComparisonAttribute::SkinTypeFocus,
        ComparisonAttribute::KeyIngredients,
        ComparisonAttribute::Price,
        ComparisonAttribute::TextureFormat,
    ];

    /// Human-readable label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            ComparisonAttribute::TargetConcern => "Target concern",
            ComparisonAttribute::SkinTypeFocus => "Skin type focus",
            ComparisonAttribute::KeyIngredients => "Key ingredients",
            ComparisonAttribute::Price => "Price (₹)",
            ComparisonAttribute::TextureFormat => "Texture / format",
        }
    }
}

/// A single side of a comparison point
///
/// Prices stay numeric in the output; everything else is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    Amount(u64),
    Text(String),
}

impl PointValue {
    /// Text value
    pub fn text(value: impl Into<String>) -> Self {
        PointValue::Text(value.into())
    }

    /// Borrow the text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PointValue::Text(s) => Some(s),
            PointValue::Amount(_) => None,
        }
    }
}

/// One row of a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub attribute: ComparisonAttribute,
    #[serde(rename = "product_A")]
    pub product_a: PointValue,
    #[serde(rename = "product_B")]
    pub product_b: PointValue,
}
