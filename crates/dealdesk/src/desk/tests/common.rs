use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate};

use crate::desk::domain::{
    Settlement, SettlementId, SettlementStatus, Trade, TradeDetail, TradeId, TradeSide,
    TradeStatus,
};
use crate::desk::repository::{
    DeskRepository, EscalationAlert, EscalationError, EscalationPublisher, RepositoryError,
};
use crate::desk::service::DeskService;

/// Fixed reference day so every ranking in the suite is reproducible.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).expect("valid date")
}

/// ISO date string at an offset from the fixed reference day.
pub(super) fn date(offset_days: i64) -> String {
    (today() + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

pub(super) fn quiet_trade(id: &str) -> Trade {
    Trade {
        trade_id: TradeId(format!("TRD-{id}")),
        counterparty: "Meridian Capital".to_string(),
        facility: "Term Loan B".to_string(),
        notional_usd: 25_000_000,
        status: TradeStatus::Draft,
        settlement_date: None,
        flagged_items: 0,
        open_questions: 0,
        dd_progress_pct: None,
    }
}

pub(super) fn trade(id: &str) -> Trade {
    Trade {
        status: TradeStatus::InDueDiligence,
        dd_progress_pct: Some(80),
        ..quiet_trade(id)
    }
}

pub(super) fn settlement(id: &str) -> Settlement {
    Settlement {
        settlement_id: SettlementId(format!("STL-{id}")),
        trade_id: TradeId(format!("TRD-{id}")),
        side: TradeSide::Buy,
        amount_usd: 10_000_000,
        status: SettlementStatus::Pending,
        settlement_date: None,
    }
}

pub(super) fn detail(id: &str) -> TradeDetail {
    TradeDetail {
        trade_id: TradeId(format!("TRD-{id}")),
        review_due_date: None,
        missing_documents: 0,
        comparison_discrepancies: 0,
        unresolved_comments: 0,
    }
}

#[derive(Default)]
pub(super) struct MemoryDesk {
    trades: Mutex<BTreeMap<TradeId, Trade>>,
    settlements: Mutex<BTreeMap<SettlementId, Settlement>>,
}

impl DeskRepository for MemoryDesk {
    fn insert_trade(&self, trade: Trade) -> Result<(), RepositoryError> {
        let mut guard = self.trades.lock().expect("trade mutex poisoned");
        if guard.contains_key(&trade.trade_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(trade.trade_id.clone(), trade);
        Ok(())
    }

    fn fetch_trade(&self, id: &TradeId) -> Result<Option<Trade>, RepositoryError> {
        let guard = self.trades.lock().expect("trade mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending_trades(&self) -> Result<Vec<Trade>, RepositoryError> {
        let guard = self.trades.lock().expect("trade mutex poisoned");
        Ok(guard
            .values()
            .filter(|trade| trade.status.is_open())
            .cloned()
            .collect())
    }

    fn insert_settlement(&self, settlement: Settlement) -> Result<(), RepositoryError> {
        let mut guard = self.settlements.lock().expect("settlement mutex poisoned");
        if guard.contains_key(&settlement.settlement_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(settlement.settlement_id.clone(), settlement);
        Ok(())
    }

    fn pending_settlements(&self) -> Result<Vec<Settlement>, RepositoryError> {
        let guard = self.settlements.lock().expect("settlement mutex poisoned");
        Ok(guard
            .values()
            .filter(|settlement| settlement.status.is_open())
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryEscalations {
    events: Mutex<Vec<EscalationAlert>>,
}

impl MemoryEscalations {
    pub(super) fn events(&self) -> Vec<EscalationAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl EscalationPublisher for MemoryEscalations {
    fn publish(&self, alert: EscalationAlert) -> Result<(), EscalationError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    DeskService<MemoryDesk, MemoryEscalations>,
    Arc<MemoryDesk>,
    Arc<MemoryEscalations>,
) {
    let repository = Arc::new(MemoryDesk::default());
    let escalations = Arc::new(MemoryEscalations::default());
    let service = DeskService::new(repository.clone(), escalations.clone());
    (service, repository, escalations)
}
