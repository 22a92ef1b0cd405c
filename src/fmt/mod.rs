pub mod json;
pub mod text;

use clap::ValueEnum;

/// Output format for per-iteration report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
