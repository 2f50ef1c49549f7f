//! Command-line interface for spdx-deptool
//!
//! Parses arguments, wires up tracing, and runs the single
//! extract → sort → render pass over the input files.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::extract::extract_dependencies;
use crate::render::{self, OutputFormat};
use crate::sort::{sort_dependencies, SortKey};

/// Extract dependency metadata from SPDX documents
#[derive(Parser)]
#[command(name = "spdx-deptool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SPDX JSON files to parse
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value = "text",
        value_name = "FORMAT"
    )]
    pub output_format: OutputFormat,

    /// Sort dependencies by the given field
    #[arg(short = 's', long, value_enum, value_name = "FIELD")]
    pub sort_by: Option<SortKey>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    // Every file must parse before anything is printed; a failure on
    // the last file leaves stdout empty.
    let mut dependencies = Vec::new();
    for file in &cli.files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed reading SPDX file: {}", file.display()))?;
        let extracted = extract_dependencies(&content)
            .with_context(|| format!("Failed extracting dependencies from {}", file.display()))?;
        tracing::debug!(file = %file.display(), count = extracted.len(), "extracted dependencies");
        dependencies.extend(extracted);
    }

    let dependencies = sort_dependencies(dependencies, cli.sort_by);

    let report = render::render(&dependencies, cli.output_format)?;
    print!("{report}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::render::OutputFormat;
    use crate::sort::SortKey;
    use clap::Parser;

    #[test]
    fn defaults_to_text_and_no_sort() {
        let cli = Cli::try_parse_from(["spdx-deptool", "sbom.json"]).expect("parse");
        assert_eq!(cli.output_format, OutputFormat::Text);
        assert!(cli.sort_by.is_none());
        assert_eq!(cli.files.len(), 1);
    }

    #[test]
    fn md_is_an_alias_for_markdown() {
        let cli =
            Cli::try_parse_from(["spdx-deptool", "sbom.json", "-o", "md"]).expect("parse");
        assert_eq!(cli.output_format, OutputFormat::Markdown);
    }

    #[test]
    fn accepts_sort_field() {
        let cli = Cli::try_parse_from(["spdx-deptool", "sbom.json", "--sort-by", "license"])
            .expect("parse");
        assert_eq!(cli.sort_by, Some(SortKey::License));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["spdx-deptool", "sbom.json", "-o", "yaml"]).is_err());
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["spdx-deptool", "sbom.json", "-s", "size"]).is_err());
    }

    #[test]
    fn requires_at_least_one_file() {
        assert!(Cli::try_parse_from(["spdx-deptool"]).is_err());
    }
}
