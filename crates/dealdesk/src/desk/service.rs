use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::blotter::{self, BlotterImportError};
use super::domain::{Settlement, Trade};
use super::priority::{Prioritized, UrgencyBand};
use super::repository::{
    DeskRepository, EscalationAlert, EscalationError, EscalationPublisher, RepositoryError,
};
use super::settlements::SettlementTriage;
use super::trades::TradeTriage;
use super::views::InboxView;

/// Service composing the repository, the escalation hook, and the triage
/// engines for the desk inboxes.
pub struct DeskService<R, E> {
    repository: Arc<R>,
    escalations: Arc<E>,
    trades: TradeTriage,
    settlements: SettlementTriage,
}

impl<R, E> DeskService<R, E>
where
    R: DeskRepository + 'static,
    E: EscalationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, escalations: Arc<E>) -> Self {
        Self {
            repository,
            escalations,
            trades: TradeTriage::new(),
            settlements: SettlementTriage::new(),
        }
    }

    /// Store a batch of trades on the blotter.
    pub fn ingest_trades(&self, trades: Vec<Trade>) -> Result<usize, DeskServiceError> {
        let count = trades.len();
        for trade in trades {
            self.repository.insert_trade(trade)?;
        }
        info!(count, "ingested trades onto the desk blotter");
        Ok(count)
    }

    /// Store a batch of settlement instructions.
    pub fn ingest_settlements(
        &self,
        settlements: Vec<Settlement>,
    ) -> Result<usize, DeskServiceError> {
        let count = settlements.len();
        for settlement in settlements {
            self.repository.insert_settlement(settlement)?;
        }
        info!(count, "ingested settlement instructions");
        Ok(count)
    }

    /// Parse a blotter CSV export and store every row.
    pub fn import_blotter<Rd: Read>(&self, reader: Rd) -> Result<usize, DeskServiceError> {
        let trades = blotter::parse_trades(reader)?;
        self.ingest_trades(trades)
    }

    /// Rank the open trades for the given calendar day.
    ///
    /// Critical entries are escalated through the configured publisher as
    /// part of assembling the view; the inbox is recomputed from the
    /// repository on every call, so the ranking always reflects `today`.
    pub fn trade_inbox(&self, today: NaiveDate) -> Result<InboxView<Trade>, DeskServiceError> {
        let pending = self.repository.pending_trades()?;
        let prioritized = self.trades.prioritize(pending, today);
        let stats = self.trades.inbox_stats(&prioritized);

        self.escalate(&prioritized, |trade: &Trade| trade.trade_id.0.clone(), |score| {
            self.trades.band(score)
        })?;

        Ok(InboxView::assemble(today, stats, prioritized, |score| {
            self.trades.band(score)
        }))
    }

    /// Rank the open settlements for the given calendar day.
    pub fn settlement_inbox(
        &self,
        today: NaiveDate,
    ) -> Result<InboxView<Settlement>, DeskServiceError> {
        let pending = self.repository.pending_settlements()?;
        let prioritized = self.settlements.prioritize(pending, today);
        let stats = self.settlements.inbox_stats(&prioritized);

        self.escalate(
            &prioritized,
            |settlement: &Settlement| settlement.settlement_id.0.clone(),
            |score| self.settlements.band(score),
        )?;

        Ok(InboxView::assemble(today, stats, prioritized, |score| {
            self.settlements.band(score)
        }))
    }

    fn escalate<T>(
        &self,
        prioritized: &[Prioritized<T>],
        reference: impl Fn(&T) -> String,
        band_of: impl Fn(u32) -> UrgencyBand,
    ) -> Result<(), DeskServiceError> {
        for entry in prioritized {
            if band_of(entry.priority.score) != UrgencyBand::Critical {
                continue;
            }

            let mut details = BTreeMap::new();
            for reason in &entry.priority.reasons {
                details.insert(reason.kind.key().to_string(), reason.label.clone());
            }

            let alert = EscalationAlert {
                reference: reference(&entry.item),
                score: entry.priority.score,
                suggested_action: entry.priority.suggested_action.clone(),
                details,
            };
            info!(
                reference = %alert.reference,
                score = alert.score,
                "escalating critical inbox entry"
            );
            self.escalations.publish(alert)?;
        }
        Ok(())
    }
}

/// Error raised by the desk service.
#[derive(Debug, thiserror::Error)]
pub enum DeskServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Escalation(#[from] EscalationError),
    #[error(transparent)]
    Import(#[from] BlotterImportError),
}
