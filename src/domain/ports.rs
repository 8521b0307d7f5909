use crate::domain::model::{OutputFormat, SourceLine, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Human-readable location of `path`, used in run summaries.
    fn display_path(&self, path: &str) -> String {
        path.to_string()
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn format(&self) -> OutputFormat;
    fn strict(&self) -> bool;
    fn verbose(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<SourceLine>>;
    fn transform(&self, lines: Vec<SourceLine>) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult) -> Result<String>;
}
