//! Triage configuration for the trade detail review queue.

use super::domain::TradeDetail;
use super::priority::factors::{count_tiers, deadline_proximity, CountTier, DeadlineTiers};
use super::priority::{
    BoxedExtractor, InboxStats, Prioritized, PriorityEngine, PriorityReason, PriorityResult,
    ReasonKind, UrgencyBand,
};
use chrono::NaiveDate;

const REVIEW_DATE_TIERS: DeadlineTiers = DeadlineTiers {
    overdue: 40,
    today: 30,
    within_three_days: 20,
    within_week: 10,
};

const MISSING_DOCUMENT_TIERS: &[CountTier] = &[
    CountTier {
        at_least: 3,
        weight: 30,
    },
    CountTier {
        at_least: 1,
        weight: 18,
    },
];

const DISCREPANCY_TIERS: &[CountTier] = &[
    CountTier {
        at_least: 5,
        weight: 25,
    },
    CountTier {
        at_least: 1,
        weight: 12,
    },
];

const UNRESOLVED_COMMENT_TIERS: &[CountTier] = &[
    CountTier {
        at_least: 8,
        weight: 15,
    },
    CountTier {
        at_least: 1,
        weight: 6,
    },
];

fn review_due_date(detail: &TradeDetail) -> Option<&str> {
    detail.review_due_date.as_deref()
}

fn factors() -> Vec<BoxedExtractor<TradeDetail>> {
    vec![
        Box::new(deadline_proximity(review_due_date, REVIEW_DATE_TIERS)),
        Box::new(count_tiers(
            ReasonKind::MissingDocuments,
            "missing document",
            "missing documents",
            |detail: &TradeDetail| detail.missing_documents,
            MISSING_DOCUMENT_TIERS,
        )),
        Box::new(count_tiers(
            ReasonKind::Discrepancies,
            "comparison discrepancy",
            "comparison discrepancies",
            |detail: &TradeDetail| detail.comparison_discrepancies,
            DISCREPANCY_TIERS,
        )),
        Box::new(count_tiers(
            ReasonKind::UnresolvedComments,
            "unresolved comment",
            "unresolved comments",
            |detail: &TradeDetail| detail.unresolved_comments,
            UNRESOLVED_COMMENT_TIERS,
        )),
    ]
}

fn suggest_action(_detail: &TradeDetail, reasons: &[PriorityReason]) -> String {
    match reasons.first() {
        None => "Monitor trade detail activity".to_string(),
        Some(lead) => match lead.kind {
            ReasonKind::Deadline if lead.label.contains("overdue") => {
                "Document review is overdue; schedule it immediately".to_string()
            }
            ReasonKind::Deadline => "Schedule the document review ahead of the deadline".to_string(),
            ReasonKind::MissingDocuments => {
                "Request outstanding documents from the counterparty".to_string()
            }
            ReasonKind::Discrepancies => {
                "Walk through the comparison discrepancies with legal".to_string()
            }
            ReasonKind::UnresolvedComments => {
                "Resolve open comment threads with the reviewers".to_string()
            }
            _ => "Monitor trade detail activity".to_string(),
        },
    }
}

/// Trade detail review engine. Construct once and share.
pub struct TradeDetailTriage {
    engine: PriorityEngine<TradeDetail>,
}

impl TradeDetailTriage {
    pub fn new() -> Self {
        Self {
            engine: PriorityEngine::new(factors(), suggest_action),
        }
    }

    pub fn calculate_priority(&self, detail: &TradeDetail, today: NaiveDate) -> PriorityResult {
        self.engine.calculate_priority(detail, today)
    }

    pub fn prioritize(
        &self,
        details: Vec<TradeDetail>,
        today: NaiveDate,
    ) -> Vec<Prioritized<TradeDetail>> {
        self.engine.prioritize(details, today)
    }

    pub fn inbox_stats(&self, prioritized: &[Prioritized<TradeDetail>]) -> InboxStats {
        self.engine.stats(prioritized)
    }

    pub fn band(&self, score: u32) -> UrgencyBand {
        self.engine.band(score)
    }
}

impl Default for TradeDetailTriage {
    fn default() -> Self {
        Self::new()
    }
}
