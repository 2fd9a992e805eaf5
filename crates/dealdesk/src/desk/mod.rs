//! Desk triage: priority scoring, inbox ranking, and the service surface.
//!
//! `priority` is the generic engine; `trades`, `trade_details`, and
//! `settlements` wire domain-specific factors and wording around it. The
//! `service` and `router` modules expose the ranked inboxes over the
//! repository and escalation seams, and `blotter` brings upstream CSV
//! exports onto the desk.

pub mod blotter;
pub mod domain;
pub mod priority;
pub mod repository;
pub mod router;
pub mod service;
pub mod settlements;
pub mod trade_details;
pub mod trades;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Settlement, SettlementId, SettlementStatus, Trade, TradeDetail, TradeId, TradeSide,
    TradeStatus,
};
pub use priority::{
    BoxedExtractor, BucketThresholds, FactorExtractor, FactorOutcome, InboxStats, Prioritized,
    PriorityEngine, PriorityReason, PriorityResult, ReasonKind, UrgencyBand,
};
pub use repository::{
    DeskRepository, EscalationAlert, EscalationError, EscalationPublisher, RepositoryError,
};
pub use router::desk_router;
pub use service::{DeskService, DeskServiceError};
pub use settlements::SettlementTriage;
pub use trade_details::TradeDetailTriage;
pub use trades::TradeTriage;
pub use views::{InboxEntry, InboxView};
