//! pagewright-core - Product pages from one record
//!
//! Derives FAQ questions, narrative content blocks and comparison points from
//! a canonical [`ProductRecord`], then assembles them into three page
//! documents.
//!
//! # Example
//!
//! ```
//! use pagewright_core::{MemorySink, Pipeline, ReferenceComparison};
//! use pagewright_data::InlineSource;
//! use serde_json::json;
//!
//! let source = InlineSource::new(json!({
//!     "product_name": "GlowC Serum",
//!     "concentration": "10% Vitamin C",
//!     "skin_type": ["Oily", "Combination"],
//!     "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
//!     "benefits": ["Brightening", "Hydration"],
//!     "how_to_use": "Apply 3-4 drops",
//!     "side_effects": "mild tingling",
//!     "price_in_inr": 899
//! }));
//!
//! let mut sink = MemorySink::new();
//! let report = Pipeline::new()
//!     .run(&source, &ReferenceComparison, &mut sink)
//!     .unwrap();
//!
//! assert_eq!(report.comparison_point_count, 5);
//! assert!(sink.get("faq.json").unwrap().contains("GlowC Serum"));
//! ```

pub mod assembler;
pub mod blocks;
pub mod comparison;
pub mod error;
pub mod phrasebook;
pub mod pipeline;
pub mod questions;
pub mod text;

// Re-export main types and functions
pub use assembler::PageAssembler;
pub use blocks::ContentBlockDeriver;
pub use comparison::Counterpart;
pub use error::{PipelineError, Result};
pub use phrasebook::Phrasebook;
pub use pipeline::{
    check_artifact_names, Artifact, ComparisonSupplier, DirectorySink, DocumentSink,
    FileComparison, MemorySink, OutputNames, PageSet, Pipeline, ReferenceComparison, RunReport,
};
pub use questions::{QuestionDeriver, QUESTION_COUNT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
