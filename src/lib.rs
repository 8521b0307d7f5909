pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::RunConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::core::{
    aggregate::aggregate,
    etl::EtlEngine,
    parser::{LineParser, ParseMode},
    pipeline::LrPipeline,
    writer::render,
};
pub use crate::domain::model::{Direction, OutputFormat, Record, RunStats, RunSummary};
pub use crate::utils::error::{LrError, Result};
