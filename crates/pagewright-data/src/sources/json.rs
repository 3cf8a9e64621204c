//! JSON data sources.

use std::fs;
use std::path::{Path, PathBuf};

use pagewright_model::ComparisonRecord;
use serde_json::Value;
use tracing::debug;

use crate::error::{RecordError, Result};
use crate::sources::RecordSource;
use crate::RawRecord;

/// Product record stored in a JSON file
pub struct JsonFileSource {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a new JSON source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RecordError::FileNotFound(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<RawRecord> {
        let content = fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), bytes = content.len(), "read product input");
        let value: Value = serde_json::from_str(&content)?;
        into_object(value)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Product record held in memory
pub struct InlineSource {
    value: Value,
}

impl InlineSource {
    /// Wrap an already-parsed JSON value
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl RecordSource for InlineSource {
    fn load(&self) -> Result<RawRecord> {
        into_object(self.value.clone())
    }

    fn describe(&self) -> String {
        "inline record".to_string()
    }
}

/// Read a comparison record from a JSON file
///
/// The file must hold a JSON object. Its contents are kept as they are;
/// values are only interpreted later, when comparison points are derived.
pub fn load_comparison_file(path: impl AsRef<Path>) -> Result<ComparisonRecord> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RecordError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "read comparison record");
    Ok(ComparisonRecord::from_fields(into_object(value)?))
}

fn into_object(value: Value) -> Result<RawRecord> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(RecordError::NotAnObject("an array")),
        Value::String(_) => Err(RecordError::NotAnObject("a string")),
        Value::Number(_) => Err(RecordError::NotAnObject("a number")),
        Value::Bool(_) => Err(RecordError::NotAnObject("a boolean")),
        Value::Null => Err(RecordError::NotAnObject("null")),
    }
}
