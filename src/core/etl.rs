use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform, then load. Any failure before `load` leaves the
    /// destination untouched.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting L/R parse");

        let lines = self.pipeline.extract()?;
        tracing::debug!("Extracted {} lines", lines.len());

        let result = self.pipeline.transform(lines)?;
        let output_path = self.pipeline.load(&result)?;

        tracing::info!("✅ Output saved to: {}", output_path);

        Ok(RunSummary {
            output_path,
            stats: result.stats,
            skipped: result.warnings.len(),
        })
    }
}
