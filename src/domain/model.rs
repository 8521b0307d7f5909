use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction letter of an instruction line. `L` moves left (negative), `R` moves right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    L,
    R,
}

impl Direction {
    /// Case-insensitive lookup from the first character of an instruction.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Direction::L),
            'R' => Some(Direction::R),
            _ => None,
        }
    }

    pub fn apply(self, magnitude: i64) -> i64 {
        match self {
            Direction::L => -magnitude,
            Direction::R => magnitude,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::L => f.write_str("L"),
            Direction::R => f.write_str("R"),
        }
    }
}

/// One parsed instruction. `index` is the original 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub index: usize,
    pub letter: Direction,
    pub value: i64,
}

impl Record {
    pub fn new(index: usize, letter: Direction, magnitude: i64) -> Self {
        Self {
            index,
            letter,
            value: letter.apply(magnitude),
        }
    }
}

/// A raw input line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Kept(Record),
    Skipped,
    Failed(MalformedLine),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<Record>,
    pub warnings: Vec<MalformedLine>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub final_position: i128,
    pub max_right: i128,
    pub max_left: i128,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub warnings: Vec<MalformedLine>,
    pub stats: RunStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected one of: text, csv, json",
                other
            )),
        }
    }
}

/// Outcome of a successful run, printed to stdout by the binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub stats: RunStats,
    pub skipped: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Done. Output saved to:")?;
        writeln!(f, "  {}", self.output_path)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "  final_position = {}", self.stats.final_position)?;
        writeln!(f, "  max_right      = {}", self.stats.max_right)?;
        write!(f, "  max_left       = {}", self.stats.max_left)
    }
}
