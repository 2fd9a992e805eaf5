//! Import of upstream blotter CSV exports onto the desk.

mod mapping;
mod parser;

use std::io::Read;
use std::path::Path;

use super::domain::Trade;

/// Error raised while importing a blotter export.
#[derive(Debug, thiserror::Error)]
pub enum BlotterImportError {
    #[error("failed to read blotter export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid blotter CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown trade status '{value}'")]
    UnknownStatus { line: usize, value: String },
}

/// Parse a blotter CSV export into trades.
pub fn parse_trades<R: Read>(reader: R) -> Result<Vec<Trade>, BlotterImportError> {
    parser::parse_trades(reader)
}

/// Convenience wrapper for CLI callers working from a file on disk.
pub fn import_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Trade>, BlotterImportError> {
    let file = std::fs::File::open(path)?;
    parse_trades(file)
}
