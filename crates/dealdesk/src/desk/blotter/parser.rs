use std::io::Read;

use serde::Deserialize;

use super::mapping;
use super::BlotterImportError;
use crate::desk::domain::Trade;

/// Raw blotter row as exported upstream. Optional columns arrive as empty
/// cells, which the csv reader surfaces as `None` after trimming.
#[derive(Debug, Deserialize)]
pub(super) struct BlotterRow {
    #[serde(rename = "Trade ID")]
    pub(super) trade_id: String,
    #[serde(rename = "Counterparty")]
    pub(super) counterparty: String,
    #[serde(rename = "Facility")]
    pub(super) facility: String,
    #[serde(rename = "Notional (USD)")]
    pub(super) notional_usd: u64,
    #[serde(rename = "Status")]
    pub(super) status: String,
    #[serde(rename = "Settlement Date", default)]
    pub(super) settlement_date: Option<String>,
    #[serde(rename = "Flagged Items", default)]
    pub(super) flagged_items: Option<u32>,
    #[serde(rename = "Open Questions", default)]
    pub(super) open_questions: Option<u32>,
    #[serde(rename = "DD Progress", default)]
    pub(super) dd_progress: Option<u8>,
}

pub(super) fn parse_trades<R: Read>(reader: R) -> Result<Vec<Trade>, BlotterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut trades = Vec::new();

    for (index, record) in csv_reader.deserialize::<BlotterRow>().enumerate() {
        let row = record?;
        // Line numbers are 1-based with the header on line 1.
        trades.push(mapping::trade_from_row(row, index + 2)?);
    }

    Ok(trades)
}
