//! # pagewright-data
//!
//! Raw input handling for pagewright - read a loosely structured product
//! record and turn it into a validated, canonical [`ProductRecord`].
//!
//! ## Features
//!
//! - **Sources**: JSON files and in-memory values behind [`RecordSource`]
//! - **Canonicalization**: one coercion table ([`FIELD_RULES`]) covering every
//!   accepted input shape
//! - **Total validation**: every missing field is reported in a single error
//!
//! ## Example
//!
//! ```rust,ignore
//! use pagewright_data::{load_product, JsonFileSource};
//!
//! let source = JsonFileSource::new("data/product.json")?;
//! let record = load_product(&source)?;
//! println!("{} costs ₹{}", record.name, record.price_in_inr);
//! ```

pub mod builder;
pub mod error;
pub mod sources;

// Re-exports
pub use builder::{
    normalize_side_effects, split_delimited, FieldRule, FieldShape, RecordBuilder, FIELD_RULES,
};
pub use error::{RecordError, Result};
pub use pagewright_model::{ComparisonRecord, ProductRecord};
pub use sources::{load_comparison_file, InlineSource, JsonFileSource, RecordSource};

/// Raw key-value record as it arrives from a source
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Load a raw record from `source` and canonicalize it
pub fn load_product(source: &dyn RecordSource) -> Result<ProductRecord> {
    let raw = source.load()?;
    RecordBuilder::build(&raw)
}
