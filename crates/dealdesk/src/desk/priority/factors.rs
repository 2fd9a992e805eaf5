//! Reusable factor factories shared by the desk engines.

use chrono::NaiveDate;

use super::factor::{FactorExtractor, FactorOutcome, ReasonKind};

/// Score awarded per deadline proximity band.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineTiers {
    pub overdue: u32,
    pub today: u32,
    pub within_three_days: u32,
    pub within_week: u32,
}

/// Builds a factor that tiers urgency by days until a deadline.
///
/// The accessor returns the raw upstream date string (ISO `YYYY-MM-DD`).
/// Absent or unparseable values contribute nothing: upstream records are
/// routinely incomplete and must never break an inbox, so a missing
/// deadline is "not urgent" rather than an error. Day arithmetic is
/// calendar-day only; time of day never shifts an item between bands.
///
/// Band selection, first match wins: overdue, due today, due within three
/// days, due within a week. Deadlines further out contribute nothing.
/// Overdue labels always contain the word "overdue" so suggestion
/// generators can key off it.
pub fn deadline_proximity<T, F>(accessor: F, tiers: DeadlineTiers) -> impl FactorExtractor<T>
where
    F: Fn(&T) -> Option<&str> + Send + Sync,
{
    move |item: &T, today: NaiveDate| {
        let deadline = match accessor(item).and_then(parse_iso_date) {
            Some(deadline) => deadline,
            None => return FactorOutcome::none(),
        };

        let days_until = (deadline - today).num_days();
        if days_until < 0 {
            let days_overdue = -days_until;
            return FactorOutcome::contributes(
                ReasonKind::Deadline,
                format!(
                    "Deadline overdue by {days_overdue} day{}",
                    plural(days_overdue)
                ),
                tiers.overdue,
            );
        }
        if days_until == 0 {
            return FactorOutcome::contributes(ReasonKind::Deadline, "Deadline is today", tiers.today);
        }
        if days_until <= 3 {
            return FactorOutcome::contributes(
                ReasonKind::Deadline,
                format!("Deadline in {days_until} day{}", plural(days_until)),
                tiers.within_three_days,
            );
        }
        if days_until <= 7 {
            return FactorOutcome::contributes(
                ReasonKind::Deadline,
                format!("Deadline within a week ({days_until} days)"),
                tiers.within_week,
            );
        }

        FactorOutcome::none()
    }
}

/// One band of a count-threshold factor: counts of `at_least` or more earn
/// `weight` points, unless a higher band already matched.
#[derive(Debug, Clone, Copy)]
pub struct CountTier {
    pub at_least: u32,
    pub weight: u32,
}

/// Builds a factor that thresholds a count into discrete score bands.
///
/// `tiers` must be ordered from highest `at_least` downward; the first
/// band the count reaches wins. A count below every band, including zero,
/// contributes nothing.
pub fn count_tiers<T, F>(
    kind: ReasonKind,
    singular: &'static str,
    plural_noun: &'static str,
    accessor: F,
    tiers: &'static [CountTier],
) -> impl FactorExtractor<T>
where
    F: Fn(&T) -> u32 + Send + Sync,
{
    move |item: &T, _today: NaiveDate| {
        let count = accessor(item);
        for tier in tiers {
            if count >= tier.at_least {
                let noun = if count == 1 { singular } else { plural_noun };
                return FactorOutcome::contributes(kind, format!("{count} {noun}"), tier.weight);
            }
        }
        FactorOutcome::none()
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
