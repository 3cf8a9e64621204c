//! Content block deriver
//!
//! Narrative copy fragments built from fixed phrasing templates, plus the
//! comparison points (implemented in [`crate::comparison`]).

use pagewright_model::{ComparisonPoint, ComparisonRecord, ContentBlocks, ProductRecord};

use crate::comparison;
use crate::phrasebook::Phrasebook;
use crate::text::{as_sentence, capitalize, join_natural, lowercase_all};

/// Derives narrative content blocks
pub struct ContentBlockDeriver;

impl ContentBlockDeriver {
    /// Build all four blocks for `product`
    pub fn blocks(product: &ProductRecord, phrases: &Phrasebook) -> ContentBlocks {
        ContentBlocks {
            benefits: Self::benefits(product, phrases),
            usage: Self::usage(product),
            safety: Self::safety(product, phrases),
            ingredients: Self::ingredients(product),
        }
    }

    /// Comparison points against a counterpart record
    pub fn comparison_points(
        product: &ProductRecord,
        counterpart: &ComparisonRecord,
        phrases: &Phrasebook,
    ) -> Vec<ComparisonPoint> {
        comparison::comparison_points(product, counterpart, phrases)
    }

    /// Benefits overview
    pub fn benefits(product: &ProductRecord, phrases: &Phrasebook) -> String {
        format!(
            "This {} targets {} while being suitable for {} skin types.",
            phrases.product_noun,
            join_natural(&lowercase_all(&product.benefits)),
            join_natural(&lowercase_all(&product.skin_type)),
        )
    }

    /// Usage instructions wrapped in routine guidance
    pub fn usage(product: &ProductRecord) -> String {
        format!(
            "Use on clean, dry skin. {} Avoid the eye area and always follow with sunscreen in the morning.",
            as_sentence(&product.usage)
        )
    }

    /// Safety notes, falling back to the phrasebook when no side effects are reported
    pub fn safety(product: &ProductRecord, phrases: &Phrasebook) -> String {
        let opening = if product.has_side_effects() {
            format!(
                "Some users, especially with sensitive skin, may experience {}.",
                join_natural(&lowercase_all(&product.side_effects))
            )
        } else {
            as_sentence(&capitalize(&phrases.no_side_effects))
        };

        format!(
            "{} Introduce the {} gradually and discontinue use if irritation persists.",
            opening, phrases.product_noun
        )
    }

    /// Ingredient highlight
    ///
    /// A single ingredient is named once with no conjunction; two or more are
    /// comma-separated with "and" before the last.
    pub fn ingredients(product: &ProductRecord) -> String {
        let benefits = join_natural(&lowercase_all(&product.benefits));
        match product.ingredients.as_slice() {
            [only] => format!("The formula is built around {} to deliver {}.", only, benefits),
            ingredients => format!(
                "The formula combines {} to deliver {}.",
                join_natural(ingredients),
                benefits
            ),
        }
    }
}
