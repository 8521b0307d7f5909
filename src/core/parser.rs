use crate::core::{Direction, LineOutcome, MalformedLine, ParseReport, Record, SourceLine};
use crate::utils::error::{LrError, Result};
use regex::Regex;

// 已去除前後空白的指令行, 例如 L10, r5, L  3
const LINE_PATTERN: &str = r"^([LlRr])\s*([0-9]+)$";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

impl ParseMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

pub struct LineParser {
    pattern: Regex,
    mode: ParseMode,
}

impl LineParser {
    pub fn new(mode: ParseMode) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(LINE_PATTERN)?,
            mode,
        })
    }

    /// Classifies a single line. Mode-independent: the caller decides what a
    /// `Failed` outcome means.
    pub fn parse_line(&self, line: &str, line_number: usize) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineOutcome::Skipped;
        }

        let malformed = || {
            LineOutcome::Failed(MalformedLine {
                line_number,
                text: line.to_string(),
            })
        };

        let Some(caps) = self.pattern.captures(trimmed) else {
            return malformed();
        };

        let letter = caps[1].chars().next().and_then(Direction::from_char);
        // 超出 i64 範圍的數字視為格式錯誤, 不截斷
        let magnitude = caps[2].parse::<i64>().ok();

        match (letter, magnitude) {
            (Some(letter), Some(magnitude)) => {
                LineOutcome::Kept(Record::new(line_number, letter, magnitude))
            }
            _ => malformed(),
        }
    }

    /// Parses every line in order. In strict mode the first malformed line
    /// aborts with [`LrError::MalformedLine`]; in lenient mode it is logged,
    /// recorded in the report and dropped.
    pub fn parse_lines<I>(&self, lines: I) -> Result<ParseReport>
    where
        I: IntoIterator<Item = SourceLine>,
    {
        let mut report = ParseReport::default();

        for SourceLine { line_number, text } in lines {
            match self.parse_line(&text, line_number) {
                LineOutcome::Kept(record) => report.records.push(record),
                LineOutcome::Skipped => {
                    tracing::debug!("Skipping blank line {}", line_number);
                }
                LineOutcome::Failed(bad) => match self.mode {
                    ParseMode::Strict => {
                        return Err(LrError::MalformedLine {
                            line_number: bad.line_number,
                            text: bad.text,
                        });
                    }
                    ParseMode::Lenient => {
                        tracing::warn!("⚠️ Malformed line {}: {:?}", bad.line_number, bad.text);
                        report.warnings.push(bad);
                    }
                },
            }
        }

        Ok(report)
    }
}
