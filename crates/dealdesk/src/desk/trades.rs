//! Triage configuration for the trade inbox.

use chrono::NaiveDate;

use super::domain::{Trade, TradeStatus};
use super::priority::factors::{count_tiers, deadline_proximity, CountTier, DeadlineTiers};
use super::priority::{
    BoxedExtractor, FactorOutcome, InboxStats, Prioritized, PriorityEngine, PriorityReason,
    PriorityResult, ReasonKind, UrgencyBand,
};

const SETTLEMENT_DATE_TIERS: DeadlineTiers = DeadlineTiers {
    overdue: 50,
    today: 40,
    within_three_days: 30,
    within_week: 15,
};

const FLAGGED_ITEM_TIERS: &[CountTier] = &[
    CountTier {
        at_least: 5,
        weight: 35,
    },
    CountTier {
        at_least: 3,
        weight: 25,
    },
    CountTier {
        at_least: 1,
        weight: 15,
    },
];

const OPEN_QUESTION_TIERS: &[CountTier] = &[
    CountTier {
        at_least: 10,
        weight: 20,
    },
    CountTier {
        at_least: 5,
        weight: 12,
    },
    CountTier {
        at_least: 1,
        weight: 5,
    },
];

fn settlement_date(trade: &Trade) -> Option<&str> {
    trade.settlement_date.as_deref()
}

fn factors() -> Vec<BoxedExtractor<Trade>> {
    vec![
        Box::new(deadline_proximity(settlement_date, SETTLEMENT_DATE_TIERS)),
        Box::new(count_tiers(
            ReasonKind::FlaggedItems,
            "flagged item",
            "flagged items",
            |trade: &Trade| trade.flagged_items,
            FLAGGED_ITEM_TIERS,
        )),
        Box::new(count_tiers(
            ReasonKind::OpenQuestions,
            "open question",
            "open questions",
            |trade: &Trade| trade.open_questions,
            OPEN_QUESTION_TIERS,
        )),
        Box::new(due_diligence_factor),
        Box::new(status_factor),
    ]
}

/// A trade stuck early in due diligence is a schedule risk; the further
/// behind the review is, the more points it earns.
fn due_diligence_factor(trade: &Trade, _today: NaiveDate) -> FactorOutcome {
    if trade.status != TradeStatus::InDueDiligence {
        return FactorOutcome::none();
    }
    match trade.dd_progress_pct {
        Some(pct) if pct < 30 => FactorOutcome::contributes(
            ReasonKind::DueDiligence,
            format!("Due diligence {pct}% complete"),
            25,
        ),
        Some(pct) if pct < 60 => FactorOutcome::contributes(
            ReasonKind::DueDiligence,
            format!("Due diligence {pct}% complete"),
            10,
        ),
        _ => FactorOutcome::none(),
    }
}

fn status_factor(trade: &Trade, _today: NaiveDate) -> FactorOutcome {
    match trade.status {
        TradeStatus::AwaitingSettlement => {
            FactorOutcome::contributes(ReasonKind::Status, "Awaiting settlement", 12)
        }
        TradeStatus::InDueDiligence => {
            FactorOutcome::contributes(ReasonKind::Status, "In due diligence", 8)
        }
        _ => FactorOutcome::none(),
    }
}

fn suggest_action(_trade: &Trade, reasons: &[PriorityReason]) -> String {
    match reasons.first() {
        None => "Monitor trade progress".to_string(),
        Some(lead) => match lead.kind {
            ReasonKind::Deadline if lead.label.contains("overdue") => {
                "Escalate the overdue settlement date with the counterparty".to_string()
            }
            ReasonKind::Deadline => "Confirm settlement readiness with the counterparty".to_string(),
            ReasonKind::FlaggedItems => "Review flagged items with deal counsel".to_string(),
            ReasonKind::OpenQuestions => {
                "Chase counterparty responses on open questions".to_string()
            }
            ReasonKind::DueDiligence => "Accelerate the due diligence review".to_string(),
            ReasonKind::Status => "Progress the trade toward settlement".to_string(),
            _ => "Monitor trade progress".to_string(),
        },
    }
}

/// Trade inbox engine. Construct once and share; the instance holds no
/// per-call state.
pub struct TradeTriage {
    engine: PriorityEngine<Trade>,
}

impl TradeTriage {
    pub fn new() -> Self {
        Self {
            engine: PriorityEngine::new(factors(), suggest_action),
        }
    }

    pub fn calculate_priority(&self, trade: &Trade, today: NaiveDate) -> PriorityResult {
        self.engine.calculate_priority(trade, today)
    }

    pub fn prioritize(&self, trades: Vec<Trade>, today: NaiveDate) -> Vec<Prioritized<Trade>> {
        self.engine.prioritize(trades, today)
    }

    pub fn inbox_stats(&self, prioritized: &[Prioritized<Trade>]) -> InboxStats {
        self.engine.stats(prioritized)
    }

    pub fn band(&self, score: u32) -> UrgencyBand {
        self.engine.band(score)
    }
}

impl Default for TradeTriage {
    fn default() -> Self {
        Self::new()
    }
}
