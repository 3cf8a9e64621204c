//! Page assembler
//!
//! Composes already-derived artifacts into the three page documents. Nothing
//! here validates or recomputes; inputs are taken as they are.

use pagewright_model::{
    ComparisonPage, ComparisonPoint, ComparisonRecord, ComparisonSubject, ContentBlocks, FaqPage,
    ProductFacts, ProductPage, ProductRecord, Question,
};

use crate::phrasebook::Phrasebook;
use crate::text::{join_natural, lowercase_all};

/// Builds page documents
pub struct PageAssembler;

impl PageAssembler {
    /// FAQ page: product name plus every question, in input order
    pub fn faq_page(product: &ProductRecord, questions: &[Question]) -> FaqPage {
        FaqPage {
            product_name: product.name.clone(),
            questions: questions.to_vec(),
        }
    }

    /// Product page: description, the four content blocks, and the raw fields
    pub fn product_page(
        product: &ProductRecord,
        blocks: &ContentBlocks,
        phrases: &Phrasebook,
    ) -> ProductPage {
        ProductPage {
            product_name: product.name.clone(),
            short_description: Self::short_description(product, phrases),
            ingredients_highlight: blocks.ingredients.clone(),
            benefits_overview: blocks.benefits.clone(),
            detailed_usage: blocks.usage.clone(),
            safety_notes: blocks.safety.clone(),
            raw: ProductFacts {
                concentration: product.concentration.clone(),
                skin_type: product.skin_type.clone(),
                ingredients: product.ingredients.clone(),
                benefits: product.benefits.clone(),
                usage: product.usage.clone(),
                side_effects: product.side_effects.clone(),
                price_in_inr: product.price_in_inr,
            },
        }
    }

    /// Comparison page: product projection, counterpart as supplied, points in order
    pub fn comparison_page(
        product: &ProductRecord,
        counterpart: &ComparisonRecord,
        points: &[ComparisonPoint],
    ) -> ComparisonPage {
        ComparisonPage {
            product_a: ComparisonSubject {
                name: product.name.clone(),
                concentration: product.concentration.clone(),
                price_in_inr: product.price_in_inr,
                skin_type: product.skin_type.clone(),
                key_ingredients: product.ingredients.clone(),
                benefits: product.benefits.clone(),
            },
            product_b: counterpart.clone(),
            comparison_points: points.to_vec(),
        }
    }

    /// One-line description, e.g. "GlowC Serum is a 10% Vitamin C serum formulated for oily and combination skin."
    pub fn short_description(product: &ProductRecord, phrases: &Phrasebook) -> String {
        format!(
            "{} is a {} {} formulated for {} skin.",
            product.name,
            product.concentration,
            phrases.product_noun,
            join_natural(&lowercase_all(&product.skin_type))
        )
    }
}
