use crate::error::InfoError;
use crate::record::Record;
use clap::ValueEnum;
use std::io::Write;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Decimal values separated by single spaces
    #[default]
    Plain,
    /// One JSON object keyed by field name
    Json,
}

/// Space-separated decimal values in layout order, no trailing newline.
pub fn format_plain<R: Record>(record: &R) -> String {
    record
        .values()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn write_report<R: Record, W: Write>(
    out: &mut W,
    record: &R,
    format: OutputFormat,
) -> Result<(), InfoError> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", format_plain(record))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
