//! Output rendering (text, Markdown, CSV)
//!
//! Each format is a pure function from the final record list to the
//! exact bytes written to stdout; records are never reordered or
//! filtered here.

pub mod csv;
pub mod markdown;
pub mod text;

use anyhow::Result;
use clap::ValueEnum;

use crate::model::Dependency;

/// Report format selected with `-o/--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    #[value(alias = "md")]
    Markdown,
    Csv,
}

/// Render the full record list in the selected format.
pub fn render(dependencies: &[Dependency], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(dependencies)),
        OutputFormat::Markdown => Ok(markdown::render(dependencies)),
        OutputFormat::Csv => csv::render(dependencies),
    }
}
