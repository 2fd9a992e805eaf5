use serde::{Deserialize, Serialize};

/// Identifier wrapper for trades on the desk blotter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TradeId(pub String);

/// Identifier wrapper for settlement instructions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SettlementId(pub String);

/// Lifecycle of a loan trade from first draft through settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Draft,
    InDueDiligence,
    AwaitingSettlement,
    Settled,
    Cancelled,
}

impl TradeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            TradeStatus::Draft => "draft",
            TradeStatus::InDueDiligence => "in_due_diligence",
            TradeStatus::AwaitingSettlement => "awaiting_settlement",
            TradeStatus::Settled => "settled",
            TradeStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the trade still needs desk attention.
    pub const fn is_open(self) -> bool {
        !matches!(self, TradeStatus::Settled | TradeStatus::Cancelled)
    }
}

/// Which side of the trade this desk holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub const fn label(self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

/// Progress of a settlement instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    Pending,
    InProgress,
    Failed,
    Settled,
}

impl SettlementStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SettlementStatus::Pending => "pending",
            SettlementStatus::InProgress => "in_progress",
            SettlementStatus::Failed => "failed",
            SettlementStatus::Settled => "settled",
        }
    }

    pub const fn is_open(self) -> bool {
        !matches!(self, SettlementStatus::Settled)
    }
}

/// A loan trade as reported by the upstream blotter.
///
/// Date fields stay raw ISO strings exactly as upstream sends them; the
/// triage factors tolerate absent or malformed values so a dirty record
/// still ranks (just without its deadline signal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub counterparty: String,
    pub facility: String,
    pub notional_usd: u64,
    pub status: TradeStatus,
    pub settlement_date: Option<String>,
    pub flagged_items: u32,
    pub open_questions: u32,
    pub dd_progress_pct: Option<u8>,
}

/// Document-level view of one trade: the review workload behind the
/// headline record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDetail {
    pub trade_id: TradeId,
    pub review_due_date: Option<String>,
    pub missing_documents: u32,
    pub comparison_discrepancies: u32,
    pub unresolved_comments: u32,
}

/// A settlement instruction awaiting completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub settlement_id: SettlementId,
    pub trade_id: TradeId,
    pub side: TradeSide,
    pub amount_usd: u64,
    pub status: SettlementStatus,
    pub settlement_date: Option<String>,
}
