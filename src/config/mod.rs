use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_FILE: &str = "input.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "parsed_output.txt";

/// Plain run settings, used by the fixed-filename binary and by tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
    pub strict: bool,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: OutputFormat::Text,
            strict: false,
            verbose: false,
        }
    }

    /// `input.txt` -> `parsed_output.txt`, text, lenient.
    pub fn fixed() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(&self.input, &self.output)
    }
}

fn validate_paths(input: &str, output: &str) -> Result<()> {
    validate_path("input", input)?;
    validate_path("output", output)?;
    validate_distinct_paths(input, output)
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "lr-parse")]
#[command(about = "Parse L/R instructions into signed numbers and write them to a file")]
pub struct CliConfig {
    /// Path to input text file
    pub input: String,

    /// Path to output file (will be OVERWRITTEN)
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat malformed lines as errors (abort) instead of skipping
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(&self.input, &self.output)
    }
}
