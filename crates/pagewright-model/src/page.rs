//! Page documents
//!
//! The three output documents. Each is self-contained and its shape is
//! fixed: no field is optional or skipped during serialization, with the
//! single exception of the comparison record echoed in `ComparisonPage`,
//! which is reproduced exactly as supplied.

use serde::{Deserialize, Serialize};

use crate::content::ComparisonPoint;
use crate::question::Question;
use crate::record::ComparisonRecord;

/// FAQ page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPage {
    pub product_name: String,
    pub questions: Vec<Question>,
}

/// Product page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub product_name: String,
    pub short_description: String,
    pub ingredients_highlight: String,
    pub benefits_overview: String,
    pub detailed_usage: String,
    pub safety_notes: String,
    /// Structured record fields alongside the prose
    pub raw: ProductFacts,
}

/// Normalized record fields re-exposed on the product page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFacts {
    pub concentration: String,
    pub skin_type: Vec<String>,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub usage: String,
    pub side_effects: Vec<String>,
    pub price_in_inr: u64,
}

/// Comparison page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPage {
    #[serde(rename = "product_A")]
    pub product_a: ComparisonSubject,
    #[serde(rename = "product_B")]
    pub product_b: ComparisonRecord,
    pub comparison_points: Vec<ComparisonPoint>,
}

/// Comparable fields of the primary product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSubject {
    pub name: String,
    pub concentration: String,
    pub price_in_inr: u64,
    pub skin_type: Vec<String>,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
}
