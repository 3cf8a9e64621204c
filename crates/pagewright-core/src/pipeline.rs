//! Pipeline orchestrator
//!
//! Runs the stages in dependency order and owns the I/O boundary:
//!
//! ```text
//! RecordSource → RecordBuilder → ProductRecord
//!                                  ├─ QuestionDeriver ──────┐
//!                                  ├─ ContentBlockDeriver ──┤
//! ComparisonSupplier ──────────────┴─ comparison points ────┴─ PageAssembler → DocumentSink
//! ```
//!
//! Every page is rendered before the sink is called, so a failure in any
//! stage leaves the destination untouched.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pagewright_data::{load_comparison_file, RecordBuilder, RecordError, RecordSource};
use pagewright_model::{ComparisonPage, ComparisonRecord, FaqPage, ProductPage, ProductRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assembler::PageAssembler;
use crate::blocks::ContentBlockDeriver;
use crate::error::{PipelineError, Result};
use crate::phrasebook::Phrasebook;
use crate::questions::QuestionDeriver;

// ==================== COMPARISON SUPPLIERS ====================

/// Anything that can supply the counterpart comparison record
pub trait ComparisonSupplier {
    fn supply(&self) -> std::result::Result<ComparisonRecord, RecordError>;
}

/// The built-in reference product used when no comparison file is given
pub struct ReferenceComparison;

impl ReferenceComparison {
    /// The reference record
    pub fn record() -> ComparisonRecord {
        ComparisonRecord::new()
            .with_name("RadiantLift C+Bright Gel")
            .with_field(ComparisonRecord::CONCENTRATION, "12% Vitamin C")
            .with_price(799)
            .with_field(
                ComparisonRecord::SKIN_TYPE_DESCRIPTION,
                "Best suited for normal to combination skin.",
            )
            .with_field(
                ComparisonRecord::KEY_INGREDIENTS,
                vec!["Vitamin C", "Niacinamide"],
            )
            .with_field(
                ComparisonRecord::BENEFITS,
                vec!["Brightening", "Fades dark spots", "Supports skin barrier"],
            )
            .with_texture("Lightweight gel-cream.")
    }
}

impl ComparisonSupplier for ReferenceComparison {
    fn supply(&self) -> std::result::Result<ComparisonRecord, RecordError> {
        Ok(Self::record())
    }
}

/// Comparison record read from a JSON file
pub struct FileComparison {
    path: PathBuf,
}

impl FileComparison {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ComparisonSupplier for FileComparison {
    fn supply(&self) -> std::result::Result<ComparisonRecord, RecordError> {
        debug!(path = %self.path.display(), "loading comparison record");
        load_comparison_file(&self.path)
    }
}

impl ComparisonSupplier for ComparisonRecord {
    fn supply(&self) -> std::result::Result<ComparisonRecord, RecordError> {
        Ok(self.clone())
    }
}

// ==================== DOCUMENT SINKS ====================

/// One rendered page document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact name, e.g. "faq.json"
    pub name: String,
    /// Serialized document
    pub contents: String,
}

/// Destination for rendered page documents
///
/// `persist` receives every artifact of a run at once and returns where
/// each one ended up.
pub trait DocumentSink {
    fn persist(&mut self, artifacts: &[Artifact]) -> Result<Vec<String>>;
}

/// Writes artifacts as files in one directory
///
/// Artifacts are staged as hidden temp files and only renamed into place
/// once all of them are written. A file being replaced is first moved to a
/// backup name, so a failed rename can put every earlier file back.
pub struct DirectorySink {
    dir: PathBuf,
}

/// One artifact on its way into the output directory
struct Staged {
    temp: PathBuf,
    target: PathBuf,
    backup: PathBuf,
    replaced: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn persist_error(path: &Path, source: io::Error) -> PipelineError {
        PipelineError::Persist {
            path: path.display().to_string(),
            source,
        }
    }

    /// Fail before touching anything if a target cannot be replaced by a file
    fn check_targets(&self, artifacts: &[Artifact]) -> Result<()> {
        for artifact in artifacts {
            let target = self.dir.join(&artifact.name);
            if let Ok(meta) = fs::symlink_metadata(&target) {
                if meta.is_dir() {
                    return Err(Self::persist_error(
                        &target,
                        io::Error::new(io::ErrorKind::Other, "a directory is in the way"),
                    ));
                }
            }
        }
        Ok(())
    }

    fn stage(&self, artifacts: &[Artifact]) -> Result<Vec<Staged>> {
        let mut staged = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let temp = self.dir.join(format!(".{}.tmp", artifact.name));
            if let Err(source) = fs::write(&temp, &artifact.contents) {
                Self::discard(&staged);
                let _ = fs::remove_file(&temp);
                return Err(Self::persist_error(&temp, source));
            }
            staged.push(Staged {
                temp,
                target: self.dir.join(&artifact.name),
                backup: self.dir.join(format!(".{}.bak", artifact.name)),
                replaced: false,
            });
        }
        Ok(staged)
    }

    /// Move one staged file into place, keeping any previous file as a backup
    fn swap_in(entry: &mut Staged) -> Result<()> {
        if fs::symlink_metadata(&entry.target).is_ok() {
            fs::rename(&entry.target, &entry.backup)
                .map_err(|source| Self::persist_error(&entry.target, source))?;
            entry.replaced = true;
        }

        if let Err(source) = fs::rename(&entry.temp, &entry.target) {
            if entry.replaced {
                Self::restore(entry);
                entry.replaced = false;
            }
            return Err(Self::persist_error(&entry.target, source));
        }
        Ok(())
    }

    /// Undo `swap_in` for entries that were already moved into place
    fn roll_back(committed: &[Staged]) {
        for entry in committed.iter().rev() {
            if entry.replaced {
                Self::restore(entry);
            } else if let Err(err) = fs::remove_file(&entry.target) {
                warn!(path = %entry.target.display(), error = %err, "failed to remove partial artifact");
            }
        }
    }

    fn restore(entry: &Staged) {
        if let Err(err) = fs::rename(&entry.backup, &entry.target) {
            warn!(path = %entry.target.display(), error = %err, "failed to restore previous artifact");
        }
    }

    fn discard(staged: &[Staged]) {
        for entry in staged {
            if let Err(err) = fs::remove_file(&entry.temp) {
                warn!(path = %entry.temp.display(), error = %err, "failed to remove staged artifact");
            }
        }
    }
}

impl DocumentSink for DirectorySink {
    fn persist(&mut self, artifacts: &[Artifact]) -> Result<Vec<String>> {
        check_artifact_names(artifacts.iter().map(|a| a.name.as_str()))?;

        fs::create_dir_all(&self.dir).map_err(|source| Self::persist_error(&self.dir, source))?;
        self.check_targets(artifacts)?;

        let mut staged = self.stage(artifacts)?;
        for i in 0..staged.len() {
            if let Err(err) = Self::swap_in(&mut staged[i]) {
                Self::roll_back(&staged[..i]);
                Self::discard(&staged[i..]);
                return Err(err);
            }
        }

        let mut written = Vec::with_capacity(staged.len());
        for entry in &staged {
            if entry.replaced {
                if let Err(err) = fs::remove_file(&entry.backup) {
                    warn!(path = %entry.backup.display(), error = %err, "failed to remove backup");
                }
            }
            debug!(path = %entry.target.display(), "wrote artifact");
            written.push(entry.target.display().to_string());
        }

        Ok(written)
    }
}

/// Check that every name can be its own file in a single directory
pub fn check_artifact_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        let reason = if name.trim().is_empty() {
            Some("name is empty")
        } else if name.contains('/') || name.contains('\\') {
            Some("name contains a path separator")
        } else if name == "." || name == ".." {
            Some("name refers to a directory")
        } else if !seen.insert(name) {
            Some("name is used by more than one document")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(PipelineError::ArtifactName {
                name: name.to_string(),
                reason,
            });
        }
    }
    Ok(())
}

/// Keeps artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub artifacts: Vec<Artifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the artifact called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.contents.as_str())
    }
}

impl DocumentSink for MemorySink {
    fn persist(&mut self, artifacts: &[Artifact]) -> Result<Vec<String>> {
        self.artifacts = artifacts.to_vec();
        Ok(artifacts.iter().map(|a| a.name.clone()).collect())
    }
}

// ==================== PIPELINE ====================

/// Artifact names for the three page documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNames {
    pub faq: String,
    pub product: String,
    pub comparison: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            faq: "faq.json".to_string(),
            product: "product_page.json".to_string(),
            comparison: "comparison_page.json".to_string(),
        }
    }
}

impl OutputNames {
    /// Reject names that would collide or escape the output directory
    pub fn validate(&self) -> Result<()> {
        check_artifact_names([
            self.faq.as_str(),
            self.product.as_str(),
            self.comparison.as_str(),
        ])
    }
}

/// The three assembled page documents of one run
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    pub faq: FaqPage,
    pub product: ProductPage,
    pub comparison: ComparisonPage,
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub product_name: String,
    pub question_count: usize,
    pub comparison_point_count: usize,
    /// Where each artifact was persisted, in FAQ, product, comparison order
    pub locations: Vec<String>,
}

/// Straight-line page generation pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    phrases: Phrasebook,
    names: OutputNames,
}

impl Pipeline {
    /// Create a pipeline with default phrases and artifact names
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom phrases
    pub fn with_phrases(mut self, phrases: Phrasebook) -> Self {
        self.phrases = phrases;
        self
    }

    /// Use custom artifact names
    pub fn with_output_names(mut self, names: OutputNames) -> Self {
        self.names = names;
        self
    }

    /// Derive and assemble all pages for an already-built record
    pub fn derive(&self, product: &ProductRecord, counterpart: &ComparisonRecord) -> PageSet {
        let questions = QuestionDeriver::derive(product, &self.phrases);
        debug!(count = questions.len(), "derived questions");

        let blocks = ContentBlockDeriver::blocks(product, &self.phrases);
        let points = ContentBlockDeriver::comparison_points(product, counterpart, &self.phrases);
        debug!(points = points.len(), "derived content blocks");

        PageSet {
            faq: PageAssembler::faq_page(product, &questions),
            product: PageAssembler::product_page(product, &blocks, &self.phrases),
            comparison: PageAssembler::comparison_page(product, counterpart, &points),
        }
    }

    /// Serialize every page as pretty-printed JSON
    pub fn render(&self, pages: &PageSet) -> Result<Vec<Artifact>> {
        self.names.validate()?;
        Ok(vec![
            render_one(&self.names.faq, &pages.faq)?,
            render_one(&self.names.product, &pages.product)?,
            render_one(&self.names.comparison, &pages.comparison)?,
        ])
    }

    /// Run every stage and persist the results
    ///
    /// Nothing reaches `sink` unless all stages succeed.
    pub fn run(
        &self,
        source: &dyn RecordSource,
        supplier: &dyn ComparisonSupplier,
        sink: &mut dyn DocumentSink,
    ) -> Result<RunReport> {
        info!(source = %source.describe(), "generating pages");

        let raw = source.load()?;
        let product = RecordBuilder::build(&raw)?;
        debug!(product = %product.name, "built canonical record");

        let counterpart = supplier.supply().map_err(PipelineError::Comparison)?;

        let pages = self.derive(&product, &counterpart);
        let artifacts = self.render(&pages)?;
        let locations = sink.persist(&artifacts)?;

        info!(
            product = %product.name,
            artifacts = locations.len(),
            "pages generated"
        );

        Ok(RunReport {
            product_name: product.name,
            question_count: pages.faq.questions.len(),
            comparison_point_count: pages.comparison.comparison_points.len(),
            locations,
        })
    }
}

fn render_one<T: Serialize>(name: &str, page: &T) -> Result<Artifact> {
    let contents = serde_json::to_string_pretty(page).map_err(|source| PipelineError::Render {
        name: name.to_string(),
        source,
    })?;
    Ok(Artifact {
        name: name.to_string(),
        contents,
    })
}
