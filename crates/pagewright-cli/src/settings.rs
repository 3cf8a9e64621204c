//! Configuration settings
//!
//! Read from `pagewright.toml`. Every table and key is optional.
//!
//! ```toml
//! [output]
//! dir = "site"
//! faq = "questions.json"
//!
//! [phrases]
//! product_noun = "toner"
//!
//! [comparison]
//! path = "data/rival.json"
//! ```

use std::path::PathBuf;

use pagewright_core::{OutputNames, Phrasebook};
use serde::{Deserialize, Serialize};

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Output location and artifact names
    pub output: OutputSettings,
    /// Phrase overrides
    pub phrases: Phrasebook,
    /// Counterpart product
    pub comparison: ComparisonSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the pages are written to
    pub dir: PathBuf,
    pub faq: String,
    pub product: String,
    pub comparison: String,
}

impl OutputSettings {
    /// Artifact names for the pipeline
    pub fn names(&self) -> OutputNames {
        OutputNames {
            faq: self.faq.clone(),
            product: self.product.clone(),
            comparison: self.comparison.clone(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        let names = OutputNames::default();
        Self {
            dir: PathBuf::from("output"),
            faq: names.faq,
            product: names.product,
            comparison: names.comparison,
        }
    }
}

/// Comparison configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComparisonSettings {
    /// JSON file describing the counterpart; the built-in reference is used when unset
    pub path: Option<PathBuf>,
}
