use crate::core::aggregate::aggregate;
use crate::core::parser::{LineParser, ParseMode};
use crate::core::writer::render;
use crate::core::{ConfigProvider, Pipeline, SourceLine, Storage, TransformResult};
use crate::utils::error::Result;

/// Splits on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// start an extra line.
fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .collect();
    if content.ends_with(['\r', '\n']) {
        lines.pop();
    }
    lines
}

/// Reads an instruction file, parses and aggregates it, and writes the
/// records in the configured format.
pub struct LrPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LrPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for LrPipeline<S, C> {
    fn extract(&self) -> Result<Vec<SourceLine>> {
        let input = self.config.input_path();
        tracing::info!("Reading from {}", input);

        let content = self.storage.read_to_string(input)?;
        let lines: Vec<SourceLine> = split_lines(&content)
            .into_iter()
            .enumerate()
            .map(|(i, text)| SourceLine {
                line_number: i + 1,
                text: text.to_string(),
            })
            .collect();

        tracing::debug!("Read {} lines from {}", lines.len(), input);
        Ok(lines)
    }

    fn transform(&self, lines: Vec<SourceLine>) -> Result<TransformResult> {
        let parser = LineParser::new(ParseMode::from_strict(self.config.strict()))?;
        let report = parser.parse_lines(lines)?;

        tracing::info!(
            "Parsed {} records from {}",
            report.records.len(),
            self.config.input_path()
        );
        if !report.warnings.is_empty() {
            tracing::warn!("Skipped {} malformed lines", report.warnings.len());
        }

        let stats = aggregate(&report.records);
        tracing::info!(
            "Processed {} values. Final position={}, max_right={}, max_left={}",
            stats.count,
            stats.final_position,
            stats.max_right,
            stats.max_left
        );

        Ok(TransformResult {
            records: report.records,
            warnings: report.warnings,
            stats,
        })
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        let output = self.config.output_path();
        let format = self.config.format();

        let data = render(&result.records, format)?;
        tracing::debug!("Rendered {} bytes as {}", data.len(), format);

        self.storage.write_file(output, &data)?;
        tracing::info!("Wrote {} records to {}", result.records.len(), output);

        Ok(self.storage.display_path(output))
    }
}
