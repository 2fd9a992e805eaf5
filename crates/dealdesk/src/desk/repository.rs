use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Settlement, Trade, TradeId};

/// Storage abstraction so the desk service can be exercised in isolation.
///
/// `pending_*` returns only items still needing attention (open statuses);
/// settled and cancelled work never reappears in an inbox.
pub trait DeskRepository: Send + Sync {
    fn insert_trade(&self, trade: Trade) -> Result<(), RepositoryError>;
    fn fetch_trade(&self, id: &TradeId) -> Result<Option<Trade>, RepositoryError>;
    fn pending_trades(&self) -> Result<Vec<Trade>, RepositoryError>;
    fn insert_settlement(&self, settlement: Settlement) -> Result<(), RepositoryError>;
    fn pending_settlements(&self) -> Result<Vec<Settlement>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for critical inbox entries (chat bridge, pager, e-mail).
pub trait EscalationPublisher: Send + Sync {
    fn publish(&self, alert: EscalationAlert) -> Result<(), EscalationError>;
}

/// Alert payload emitted when a ranked item lands in the critical band.
///
/// `details` maps the stable reason keys to their human labels so the
/// receiving channel can show the same audit trail as the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationAlert {
    pub reference: String,
    pub score: u32,
    pub suggested_action: String,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum EscalationError {
    #[error("escalation transport unavailable: {0}")]
    Transport(String),
}
