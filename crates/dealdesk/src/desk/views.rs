//! Serialized inbox payloads returned to dashboards.

use chrono::NaiveDate;
use serde::Serialize;

use super::priority::{InboxStats, Prioritized, PriorityReason, UrgencyBand};

/// One ranked inbox row.
#[derive(Debug, Clone, Serialize)]
pub struct InboxEntry<T> {
    pub item: T,
    pub score: u32,
    pub band: UrgencyBand,
    pub band_label: &'static str,
    pub reasons: Vec<PriorityReason>,
    pub suggested_action: String,
}

/// A full inbox response: ranked entries plus the band rollup, stamped
/// with the calendar day the ranking was computed for.
#[derive(Debug, Clone, Serialize)]
pub struct InboxView<T> {
    pub generated_for: NaiveDate,
    pub stats: InboxStats,
    pub entries: Vec<InboxEntry<T>>,
}

impl<T> InboxView<T> {
    pub(crate) fn assemble(
        generated_for: NaiveDate,
        stats: InboxStats,
        prioritized: Vec<Prioritized<T>>,
        band_of: impl Fn(u32) -> UrgencyBand,
    ) -> Self {
        let entries = prioritized
            .into_iter()
            .map(|entry| {
                let band = band_of(entry.priority.score);
                InboxEntry {
                    score: entry.priority.score,
                    band,
                    band_label: band.label(),
                    reasons: entry.priority.reasons,
                    suggested_action: entry.priority.suggested_action,
                    item: entry.item,
                }
            })
            .collect();

        Self {
            generated_for,
            stats,
            entries,
        }
    }
}
