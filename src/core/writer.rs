use crate::core::{OutputFormat, Record};
use crate::utils::error::Result;
use std::fmt::Write as _;

pub const CSV_HEADER: [&str; 3] = ["index", "letter", "value"];

/// Renders the whole record sequence in memory. Output is deterministic for a
/// given input, so rewriting the same records yields identical bytes.
pub fn render(records: &[Record], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => Ok(render_text(records).into_bytes()),
        OutputFormat::Csv => render_csv(records),
        OutputFormat::Json => render_json(records),
    }
}

/// `L -10` style, one record per line.
pub fn render_text(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        // 寫入 String 不會失敗
        let _ = writeln!(out, "{} {}", record.letter, record.value);
    }
    out
}

pub fn render_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // 沒有資料時也要輸出表頭
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()).into())
}

pub fn render_json(records: &[Record]) -> Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(records)?;
    data.push(b'\n');
    Ok(data)
}
