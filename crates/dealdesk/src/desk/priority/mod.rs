//! Generic multi-factor priority engine.
//!
//! An engine holds an ordered list of [`FactorExtractor`]s plus a
//! domain-supplied suggestion generator. Scoring is strictly additive:
//! every factor runs on every item, the contributions are summed without
//! any cap, and each non-zero contribution is kept as a [`PriorityReason`]
//! so the total is auditable signal by signal. The engine itself knows
//! nothing about the items it scores; the desk domains wire their own
//! factors and wording around it.

mod factor;
pub mod factors;
mod stats;

pub use factor::{BoxedExtractor, FactorExtractor, FactorOutcome, PriorityReason, ReasonKind};
pub use stats::{BucketThresholds, InboxStats, UrgencyBand};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Score, audit trail, and suggested next step for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityResult {
    pub score: u32,
    pub reasons: Vec<PriorityReason>,
    pub suggested_action: String,
}

/// An item paired with its computed priority. Built fresh on every call;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prioritized<T> {
    pub item: T,
    pub priority: PriorityResult,
}

type Suggester<T> = Box<dyn Fn(&T, &[PriorityReason]) -> String + Send + Sync>;

/// Aggregates independent urgency factors into one comparable score.
///
/// Construction is a one-time cost; an engine holds no per-call state, so
/// a single instance can be shared behind an `Arc` and invoked from any
/// number of threads concurrently.
pub struct PriorityEngine<T> {
    factors: Vec<BoxedExtractor<T>>,
    suggester: Suggester<T>,
    buckets: BucketThresholds,
}

impl<T> PriorityEngine<T> {
    pub fn new<S>(factors: Vec<BoxedExtractor<T>>, suggester: S) -> Self
    where
        S: Fn(&T, &[PriorityReason]) -> String + Send + Sync + 'static,
    {
        Self {
            factors,
            suggester: Box::new(suggester),
            buckets: BucketThresholds::default(),
        }
    }

    /// Replace the shared band boundaries for this engine.
    pub fn with_buckets(mut self, buckets: BucketThresholds) -> Self {
        self.buckets = buckets;
        self
    }

    /// Score one item.
    ///
    /// Every registered factor runs, in registration order, even after a
    /// high contribution; aggregation is additive, not max-based. The
    /// reason list carries exactly the non-zero contributions, sorted by
    /// descending weight (the sort is stable, so equal weights keep
    /// registration order). The suggestion generator sees the sorted list
    /// and is expected to key off the dominant reason, falling back to a
    /// neutral default when nothing contributed.
    pub fn calculate_priority(&self, item: &T, today: NaiveDate) -> PriorityResult {
        let mut score = 0u32;
        let mut reasons = Vec::new();

        for factor in &self.factors {
            let outcome = factor.evaluate(item, today);
            if outcome.score() == 0 {
                continue;
            }
            score += outcome.score();
            if let Some(reason) = outcome.into_reason() {
                reasons.push(reason);
            }
        }

        reasons.sort_by(|a, b| b.weight.cmp(&a.weight));

        let suggested_action = (self.suggester)(item, &reasons);

        PriorityResult {
            score,
            reasons,
            suggested_action,
        }
    }

    /// Score a collection and rank it by descending score.
    ///
    /// The sort is stable: items with equal scores keep their input order.
    pub fn prioritize(&self, items: Vec<T>, today: NaiveDate) -> Vec<Prioritized<T>> {
        let mut ranked: Vec<Prioritized<T>> = items
            .into_iter()
            .map(|item| {
                let priority = self.calculate_priority(&item, today);
                Prioritized { item, priority }
            })
            .collect();

        ranked.sort_by(|a, b| b.priority.score.cmp(&a.priority.score));
        ranked
    }

    /// Roll a ranked collection up into per-band counts.
    pub fn stats(&self, prioritized: &[Prioritized<T>]) -> InboxStats {
        let mut stats = InboxStats::default();
        for entry in prioritized {
            stats.record(self.buckets.band(entry.priority.score));
        }
        stats
    }

    /// Band classification for a single score under this engine's
    /// thresholds.
    pub fn band(&self, score: u32) -> UrgencyBand {
        self.buckets.band(score)
    }
}
