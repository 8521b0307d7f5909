//! Fixed-filename variant: reads `input.txt`, writes `parsed_output.txt` as
//! text, skipping malformed lines.

use anyhow::Context;
use lr_parse::core::ConfigProvider;
use lr_parse::utils::{logger, validation::Validate};
use lr_parse::{EtlEngine, LocalStorage, LrPipeline, RunConfig};

fn main() -> anyhow::Result<()> {
    let config = RunConfig::fixed();
    logger::init_cli_logger(config.verbose());
    config.validate()?;

    let input = config.input.clone();
    let engine = EtlEngine::new(LrPipeline::new(LocalStorage::current_dir(), config));
    let summary = engine
        .run()
        .with_context(|| format!("failed to parse {}", input))?;

    println!("Done! Parsed output saved to: {}", summary.output_path);
    Ok(())
}
