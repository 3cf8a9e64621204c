//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use pagewright_core::{
    ComparisonSupplier, DirectorySink, FileComparison, Pipeline, ReferenceComparison, RunReport,
};
use pagewright_data::{load_product, JsonFileSource};
use pagewright_model::ProductRecord;

use crate::settings::Settings;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "pagewright.toml";

/// Output format for the check command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// The canonical record as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(author, version, about = "Product pages from one record", long_about = None)]
struct Cli {
    /// Log stage details (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate FAQ, product and comparison pages from a product file
    Generate {
        /// Input product JSON file
        #[arg(default_value = "data/product.json")]
        input: PathBuf,

        /// Output directory (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Comparison product JSON file (defaults to the built-in reference)
        #[arg(long)]
        comparison: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a product file without writing any pages
    Check {
        /// Input product JSON file
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output,
            comparison,
            config,
        } => {
            generate_command(
                &input,
                output.as_deref(),
                comparison.as_deref(),
                config.as_deref(),
            )?;
        }
        Commands::Check { input, format } => {
            check_command(&input, format)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Already installed when run_cli is called more than once in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the generate command
///
/// Command-line values win over the settings file.
pub fn generate_command(
    input: &Path,
    output: Option<&Path>,
    comparison: Option<&Path>,
    config: Option<&Path>,
) -> Result<RunReport> {
    let settings = load_settings(config)?;

    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.output.dir.clone());
    let comparison = comparison
        .map(Path::to_path_buf)
        .or_else(|| settings.comparison.path.clone());

    let source = JsonFileSource::new(input)
        .with_context(|| format!("Failed to open product file: {}", input.display()))?;

    let supplier: Box<dyn ComparisonSupplier> = match comparison {
        Some(path) => {
            debug!(path = %path.display(), "using comparison file");
            Box::new(FileComparison::new(path))
        }
        None => Box::new(ReferenceComparison),
    };

    let pipeline = Pipeline::new()
        .with_phrases(settings.phrases)
        .with_output_names(settings.output.names());
    let mut sink = DirectorySink::new(&output_dir);

    let report = pipeline
        .run(&source, supplier.as_ref(), &mut sink)
        .with_context(|| format!("Failed to generate pages from {}", input.display()))?;

    for location in &report.locations {
        println!("Created {}", location);
    }
    println!(
        "Pages generated in the '{}' directory.",
        output_dir.display()
    );

    Ok(report)
}

/// Execute the check command
///
/// Builds the canonical record only; nothing is written.
pub fn check_command(input: &Path, format: OutputFormat) -> Result<ProductRecord> {
    let source = JsonFileSource::new(input)
        .with_context(|| format!("Failed to open product file: {}", input.display()))?;
    let record = load_product(&source)
        .with_context(|| format!("Invalid product file: {}", input.display()))?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&record)
                .context("Failed to serialize product record to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("✓ {} is valid", input.display());
            println!("  Product:      {}", record.name);
            println!("  Skin types:   {}", record.skin_type.join(", "));
            println!("  Ingredients:  {}", record.ingredients.len());
            println!("  Benefits:     {}", record.benefits.len());
            println!("  Side effects: {}", record.side_effects.len());
            println!("  Price:        ₹{}", record.price_in_inr);
        }
    }

    Ok(record)
}

/// Load settings from a config file or use defaults
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            read_settings(path)
        }
        None => {
            let candidate = Path::new(SETTINGS_FILE);
            if candidate.exists() {
                read_settings(candidate)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Settings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}
