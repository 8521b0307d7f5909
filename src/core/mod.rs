pub mod aggregate;
pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{
    Direction, LineOutcome, MalformedLine, OutputFormat, ParseReport, Record, RunStats,
    RunSummary, SourceLine, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
