use super::parser::BlotterRow;
use super::BlotterImportError;
use crate::desk::domain::{Trade, TradeId, TradeStatus};

pub(super) fn trade_from_row(row: BlotterRow, line: usize) -> Result<Trade, BlotterImportError> {
    let status =
        status_from_label(&row.status).ok_or_else(|| BlotterImportError::UnknownStatus {
            line,
            value: row.status.clone(),
        })?;

    Ok(Trade {
        trade_id: TradeId(row.trade_id),
        counterparty: row.counterparty,
        facility: row.facility,
        notional_usd: row.notional_usd,
        status,
        settlement_date: row.settlement_date,
        flagged_items: row.flagged_items.unwrap_or(0),
        open_questions: row.open_questions.unwrap_or(0),
        dd_progress_pct: row.dd_progress,
    })
}

/// Upstream systems are inconsistent about casing and separators, so the
/// lookup normalizes before matching.
fn status_from_label(value: &str) -> Option<TradeStatus> {
    let normalized = value.trim().to_ascii_lowercase().replace(' ', "_");
    match normalized.as_str() {
        "draft" => Some(TradeStatus::Draft),
        "in_due_diligence" | "due_diligence" | "dd" => Some(TradeStatus::InDueDiligence),
        "awaiting_settlement" => Some(TradeStatus::AwaitingSettlement),
        "settled" => Some(TradeStatus::Settled),
        "cancelled" | "canceled" => Some(TradeStatus::Cancelled),
        _ => None,
    }
}
