//! pagewright-model - Shared data types
//!
//! This crate provides the types passed between pagewright stages: the
//! canonical product record, the looser comparison record, the derived
//! artifacts (questions, content blocks, comparison points) and the three
//! page documents assembled from them.
//!
//! Every type here is plain data. Construction rules live in
//! `pagewright-data` (records) and `pagewright-core` (artifacts, pages).

pub mod content;
pub mod page;
pub mod question;
pub mod record;

pub use content::{ComparisonAttribute, ComparisonPoint, ContentBlocks, PointValue};
pub use page::{ComparisonPage, ComparisonSubject, FaqPage, ProductFacts, ProductPage};
pub use question::{Question, QuestionCategory};
pub use record::{ComparisonRecord, ProductRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
