//! Question deriver
//!
//! Fills a fixed catalog of FAQ entries from a product record. Question text
//! is static apart from the product noun; answers interpolate record fields.
//! The catalog is grouped by category in [`QuestionCategory::ALL`] order:
//!
//! | Category      | Entries |
//! |---------------|---------|
//! | Informational | 4       |
//! | Usage         | 3       |
//! | Safety        | 3       |
//! | Purchase      | 2       |
//! | Comparison    | 3       |

use pagewright_model::{ProductRecord, Question, QuestionCategory};

use crate::phrasebook::Phrasebook;
use crate::text::{as_sentence, capitalize, join_natural, lowercase_all};

/// Number of entries the catalog produces
pub const QUESTION_COUNT: usize = 15;

/// Derives the FAQ question catalog
pub struct QuestionDeriver;

impl QuestionDeriver {
    /// Build the full catalog for `product`
    pub fn derive(product: &ProductRecord, phrases: &Phrasebook) -> Vec<Question> {
        let mut questions = Vec::with_capacity(QUESTION_COUNT);
        for category in QuestionCategory::ALL {
            questions.extend(Self::for_category(category, product, phrases));
        }
        questions
    }

    /// Entries for a single category, in catalog order
    pub fn for_category(
        category: QuestionCategory,
        product: &ProductRecord,
        phrases: &Phrasebook,
    ) -> Vec<Question> {
        let ctx = Context::new(product, phrases);
        match category {
            QuestionCategory::Informational => ctx.informational(),
            QuestionCategory::Usage => ctx.usage(),
            QuestionCategory::Safety => ctx.safety(),
            QuestionCategory::Purchase => ctx.purchase(),
            QuestionCategory::Comparison => ctx.comparison(),
        }
    }
}

/// Pre-joined record fields shared by every template
struct Context<'a> {
    product: &'a ProductRecord,
    phrases: &'a Phrasebook,
    noun: &'a str,
    benefits: String,
    skin_types: String,
    ingredients: String,
}

impl<'a> Context<'a> {
    fn new(product: &'a ProductRecord, phrases: &'a Phrasebook) -> Self {
        Self {
            product,
            phrases,
            noun: &phrases.product_noun,
            benefits: join_natural(&lowercase_all(&product.benefits)),
            skin_types: join_natural(&product.skin_type),
            ingredients: join_natural(&product.ingredients),
        }
    }

    fn informational(&self) -> Vec<Question> {
        let ingredients_answer = if self.product.ingredients.len() == 1 {
            format!("The key ingredient is {}.", self.ingredients)
        } else {
            format!("The key ingredients are {}.", self.ingredients)
        };

        vec![
            Question::new(
                QuestionCategory::Informational,
                format!("What is the main purpose of this {}?", self.noun),
                format!("It is formulated for {}.", self.benefits),
            ),
            Question::new(
                QuestionCategory::Informational,
                format!("What is the concentration of this {}?", self.noun),
                format!("It contains {}.", self.product.concentration),
            ),
            Question::new(
                QuestionCategory::Informational,
                format!("Which skin types is this {} suitable for?", self.noun),
                format!("It is suitable for {} skin.", self.skin_types),
            ),
            Question::new(
                QuestionCategory::Informational,
                format!("What are the key ingredients in this {}?", self.noun),
                ingredients_answer,
            ),
        ]
    }

    fn usage(&self) -> Vec<Question> {
        vec![
            Question::new(
                QuestionCategory::Usage,
                format!("How should I apply this {}?", self.noun),
                as_sentence(&self.product.usage),
            ),
            Question::new(
                QuestionCategory::Usage,
                format!("Can I use this {} every morning?", self.noun),
                "Yes, it is intended for morning use before sunscreen as part of your daily routine.",
            ),
            Question::new(
                QuestionCategory::Usage,
                format!("Should I apply moisturizer after using this {}?", self.noun),
                format!(
                    "Yes, you may follow the {} with a suitable moisturizer and then sunscreen.",
                    self.noun
                ),
            ),
        ]
    }

    fn safety(&self) -> Vec<Question> {
        let irritation = if self.product.has_side_effects() {
            format!(
                "It may cause {}, especially on sensitive skin. If irritation persists, discontinue use.",
                join_natural(&lowercase_all(&self.product.side_effects))
            )
        } else {
            format!(
                "{}. If irritation occurs, discontinue use.",
                capitalize(&self.phrases.no_side_effects)
            )
        };

        vec![
            Question::new(
                QuestionCategory::Safety,
                format!("Can this {} cause irritation?", self.noun),
                irritation,
            ),
            Question::new(
                QuestionCategory::Safety,
                format!("Is this {} safe for sensitive skin?", self.noun),
                format!(
                    "Sensitive skin may react to {}. It is recommended to do a patch test before full-face application.",
                    self.product.concentration
                ),
            ),
            Question::new(
                QuestionCategory::Safety,
                format!("Can I use this {} with other active ingredients?", self.noun),
                "It is generally best to avoid layering multiple strong actives in the same routine without guidance from a skincare professional.",
            ),
        ]
    }

    fn purchase(&self) -> Vec<Question> {
        let price = self.product.price_in_inr;
        vec![
            Question::new(
                QuestionCategory::Purchase,
                format!("What is the price of this {}?", self.noun),
                format!("The {} is priced at ₹{}.", self.noun, price),
            ),
            Question::new(
                QuestionCategory::Purchase,
                format!(
                    "Is this {} suitable for everyday use at its price point?",
                    self.noun
                ),
                format!(
                    "Yes, at ₹{} the price and formulation are designed for consistent, everyday use as part of a regular skincare routine.",
                    price
                ),
            ),
        ]
    }

    fn comparison(&self) -> Vec<Question> {
        let skin_types = join_natural(&lowercase_all(&self.product.skin_type));
        // Non-empty by construction.
        let lead_ingredient = self
            .product
            .ingredients
            .first()
            .map(String::as_str)
            .unwrap_or_default();

        vec![
            Question::new(
                QuestionCategory::Comparison,
                format!("How does this {} differ from a gel-based product?", self.noun),
                format!(
                    "This {} focuses on {} with {}, built around {}, while gel-based products may offer a lighter texture with different supporting ingredients.",
                    self.noun, self.benefits, self.product.concentration, self.ingredients
                ),
            ),
            Question::new(
                QuestionCategory::Comparison,
                format!(
                    "Is this {} better for my skin type than heavier creams?",
                    self.noun
                ),
                format!(
                    "It is made for {} skin and is more suitable than heavier creams that may feel greasy.",
                    skin_types
                ),
            ),
            Question::new(
                QuestionCategory::Comparison,
                format!(
                    "How does this {} compare to products without its key ingredient?",
                    self.noun
                ),
                format!(
                    "Compared to products without {}, this {} also delivers {}.",
                    lead_ingredient, self.noun, self.benefits
                ),
            ),
        ]
    }
}
