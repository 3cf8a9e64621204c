//! Fallback and vocabulary phrases.
//!
//! Every piece of text used when a value is missing is defined here, once.
//! The derivers only read from a `Phrasebook`; settings files may override
//! any entry through a `[phrases]` table.

use serde::{Deserialize, Serialize};

/// Fixed vocabulary and fallback text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrasebook {
    /// Noun used for the product in generated copy
    pub product_noun: String,
    /// Used when the product reports no side effects
    pub no_side_effects: String,
    /// Counterpart target concern when it lists no benefits
    pub comparison_target_concern: String,
    /// Counterpart skin-type focus when it has no description
    pub comparison_skin_type: String,
    /// Counterpart ingredients when none are listed
    pub comparison_ingredients: String,
    /// Counterpart price when none is listed
    pub comparison_price: String,
    /// Counterpart texture when none is described
    pub comparison_texture: String,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            product_noun: "serum".to_string(),
            no_side_effects: "no major side effects reported".to_string(),
            comparison_target_concern:
                "Brightening, dark spot reduction, and added barrier support.".to_string(),
            comparison_skin_type: "Designed for normal to combination skin.".to_string(),
            comparison_ingredients: "Ingredients not disclosed.".to_string(),
            comparison_price: "Price not listed.".to_string(),
            comparison_texture: "Gel-cream texture.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let phrases = Phrasebook::default();
        assert_eq!(phrases.product_noun, "serum");
        assert_eq!(phrases.no_side_effects, "no major side effects reported");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let phrases: Phrasebook =
            serde_json::from_str(r#"{"product_noun": "toner"}"#).unwrap();
        assert_eq!(phrases.product_noun, "toner");
        assert_eq!(phrases.comparison_texture, "Gel-cream texture.");
    }
}
