//! pagewright CLI - Command-line interface library
//!
//! This library provides the CLI functionality for pagewright:
//! - Generate: Write FAQ, product and comparison pages for a product file
//! - Check: Validate a product file without writing anything
//!
//! # Binary Usage
//!
//! ```bash
//! # Generate pages into ./output using the built-in comparison product
//! pagewright generate data/product.json
//!
//! # Compare against another product and write elsewhere
//! pagewright generate data/product.json --comparison data/rival.json -o site
//!
//! # Validate input, printing the canonical record
//! pagewright check data/product.json --format json
//! ```

pub mod app;
pub mod settings;

// Re-export main entry point and types
pub use app::{check_command, generate_command, run_cli, OutputFormat, SETTINGS_FILE};
pub use settings::{ComparisonSettings, OutputSettings, Settings};
