use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

use dealdesk::desk::{
    DeskRepository, EscalationAlert, EscalationError, EscalationPublisher, RepositoryError,
    Settlement, SettlementId, Trade, TradeId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local blotter storage backing the HTTP service.
#[derive(Default)]
pub(crate) struct InMemoryDeskRepository {
    trades: Mutex<BTreeMap<TradeId, Trade>>,
    settlements: Mutex<BTreeMap<SettlementId, Settlement>>,
}

impl DeskRepository for InMemoryDeskRepository {
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

/// Escalation hook that surfaces critical items in the service log until a
/// chat or pager bridge is wired in.
#[derive(Default)]
pub(crate) struct LogEscalationPublisher;

impl EscalationPublisher for LogEscalationPublisher {
    fn publish(&self, alert: EscalationAlert) -> Result<(), EscalationError> {
        warn!(
            reference = %alert.reference,
            score = alert.score,
            action = %alert.suggested_action,
            "critical desk item needs attention"
        );
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
