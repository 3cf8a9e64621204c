//! Product and comparison records
//!
//! `ProductRecord` is the canonical, validated subject of a run. It is only
//! built by the record builder in `pagewright-data` and is read-only after
//! that. `ComparisonRecord` describes the counterpart product and carries no
//! required fields at all.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical product record
///
/// All fields are non-empty except `side_effects`, which may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name
    pub name: String,
    /// Potency / concentration descriptor (e.g. "10% Vitamin C")
    pub concentration: String,
    /// Applicable skin types, in source order
    pub skin_type: Vec<String>,
    /// Key ingredients, in source order
    pub ingredients: Vec<String>,
    /// Benefits, in source order
    pub benefits: Vec<String>,
    /// Usage instructions
    pub usage: String,
    /// Reported side effects (possibly empty)
    pub side_effects: Vec<String>,
    /// Price in Indian rupees
    pub price_in_inr: u64,
}

impl ProductRecord {
    /// Whether any side effects are reported
    pub fn has_side_effects(&self) -> bool {
        !self.side_effects.is_empty()
    }
}

/// Comparison record for the counterpart product
///
/// Holds the supplied object exactly as given, nulls and unknown keys
/// included, and serializes back to it unchanged. Nothing about its shape is
/// guaranteed; readers use [`ComparisonRecord::get`] and treat values of an
/// unexpected type as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonRecord {
    fields: Map<String, Value>,
}

impl ComparisonRecord {
    pub const NAME: &'static str = "name";
    pub const CONCENTRATION: &'static str = "concentration";
    pub const PRICE_IN_INR: &'static str = "price_in_inr";
    pub const SKIN_TYPE_DESCRIPTION: &'static str = "skin_type_description";
    pub const KEY_INGREDIENTS: &'static str = "key_ingredients";
    pub const BENEFITS: &'static str = "benefits";
    pub const TEXTURE: &'static str = "texture";

    /// Create an empty comparison record
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a supplied JSON object
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All supplied keys and values
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Product name, when supplied as a string
    pub fn name(&self) -> Option<&str> {
        self.get(Self::NAME).and_then(Value::as_str)
    }

    /// Set any field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set the product name
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_field(Self::NAME, name.into())
    }

    /// Set the price in rupees
    pub fn with_price(self, price: u64) -> Self {
        self.with_field(Self::PRICE_IN_INR, price)
    }

    /// Set the texture description
    pub fn with_texture(self, texture: impl Into<String>) -> Self {
        self.with_field(Self::TEXTURE, texture.into())
    }
}
