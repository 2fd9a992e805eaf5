//! Triage configuration for the settlement inbox.

use chrono::NaiveDate;

use super::domain::{Settlement, SettlementStatus};
use super::priority::factors::{deadline_proximity, DeadlineTiers};
use super::priority::{
    BoxedExtractor, FactorOutcome, InboxStats, Prioritized, PriorityEngine, PriorityReason,
    PriorityResult, ReasonKind, UrgencyBand,
};

const SETTLEMENT_DATE_TIERS: DeadlineTiers = DeadlineTiers {
    overdue: 50,
    today: 40,
    within_three_days: 25,
    within_week: 10,
};

/// Settlements at or above this amount get extra attention regardless of
/// their dates.
const LARGE_AMOUNT_THRESHOLD_USD: u64 = 50_000_000;

fn settlement_date(settlement: &Settlement) -> Option<&str> {
    settlement.settlement_date.as_deref()
}

fn factors() -> Vec<BoxedExtractor<Settlement>> {
    vec![
        Box::new(deadline_proximity(settlement_date, SETTLEMENT_DATE_TIERS)),
        Box::new(amount_factor),
        Box::new(status_factor),
    ]
}

fn amount_factor(settlement: &Settlement, _today: NaiveDate) -> FactorOutcome {
    if settlement.amount_usd < LARGE_AMOUNT_THRESHOLD_USD {
        return FactorOutcome::none();
    }
    let millions = settlement.amount_usd / 1_000_000;
    FactorOutcome::contributes(
        ReasonKind::Amount,
        format!("Amount ${millions}M exceeds the large settlement threshold"),
        15,
    )
}

fn status_factor(settlement: &Settlement, _today: NaiveDate) -> FactorOutcome {
    match settlement.status {
        SettlementStatus::Failed => {
            FactorOutcome::contributes(ReasonKind::Status, "Settlement failed", 35)
        }
        _ => FactorOutcome::none(),
    }
}

fn suggest_action(_settlement: &Settlement, reasons: &[PriorityReason]) -> String {
    match reasons.first() {
        None => "Monitor settlement pipeline".to_string(),
        Some(lead) => match lead.kind {
            ReasonKind::Deadline if lead.label.contains("overdue") => {
                "Escalate the overdue settlement to the operations lead".to_string()
            }
            ReasonKind::Deadline => {
                "Confirm settlement instructions with the agent bank".to_string()
            }
            ReasonKind::Amount => "Verify funding lines for the large settlement".to_string(),
            ReasonKind::Status => "Investigate the failed settlement and re-instruct".to_string(),
            _ => "Monitor settlement pipeline".to_string(),
        },
    }
}

/// Settlement inbox engine. Construct once and share.
pub struct SettlementTriage {
    engine: PriorityEngine<Settlement>,
}

impl SettlementTriage {
    pub fn new() -> Self {
        Self {
            engine: PriorityEngine::new(factors(), suggest_action),
        }
    }

    pub fn calculate_priority(&self, settlement: &Settlement, today: NaiveDate) -> PriorityResult {
        self.engine.calculate_priority(settlement, today)
    }

    pub fn prioritize(
        &self,
        settlements: Vec<Settlement>,
        today: NaiveDate,
    ) -> Vec<Prioritized<Settlement>> {
        self.engine.prioritize(settlements, today)
    }

    pub fn inbox_stats(&self, prioritized: &[Prioritized<Settlement>]) -> InboxStats {
        self.engine.stats(prioritized)
    }

    pub fn band(&self, score: u32) -> UrgencyBand {
        self.engine.band(score)
    }
}

impl Default for SettlementTriage {
    fn default() -> Self {
        Self::new()
    }
}
