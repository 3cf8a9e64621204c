//! Raw input sources.
//!
//! This module contains adapters that produce raw key-value records for the
//! record builder (JSON files, in-memory values).

pub mod json;

pub use json::{load_comparison_file, InlineSource, JsonFileSource};

use crate::error::Result;
use crate::RawRecord;

/// Trait for sources that can provide one raw product record
pub trait RecordSource {
    /// Load the raw record
    fn load(&self) -> Result<RawRecord>;

    /// Short description of the source for logs and messages
    fn describe(&self) -> String;
}
