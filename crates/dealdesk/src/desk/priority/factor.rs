use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of urgency signal categories used across every desk engine.
///
/// The serialized form is the stable wire value consumed by dashboards and
/// escalation audit trails; renaming a variant here is a breaking change for
/// downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    Deadline,
    FlaggedItems,
    OpenQuestions,
    DueDiligence,
    Status,
    Amount,
    MissingDocuments,
    UnresolvedComments,
    Discrepancies,
}

impl ReasonKind {
    /// Stable string form, identical to the serialized value.
    pub const fn key(self) -> &'static str {
        match self {
            ReasonKind::Deadline => "deadline",
            ReasonKind::FlaggedItems => "flagged_items",
            ReasonKind::OpenQuestions => "open_questions",
            ReasonKind::DueDiligence => "due_diligence",
            ReasonKind::Status => "status",
            ReasonKind::Amount => "amount",
            ReasonKind::MissingDocuments => "missing_documents",
            ReasonKind::UnresolvedComments => "unresolved_comments",
            ReasonKind::Discrepancies => "discrepancies",
        }
    }
}

/// Audit record explaining why a factor contributed points.
///
/// `weight` always equals the score the factor added, so a reason list can
/// be reconciled against the total score it accompanies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityReason {
    pub kind: ReasonKind,
    pub label: String,
    pub weight: u32,
}

/// Result of running one factor against one item.
///
/// Constructed only through [`FactorOutcome::none`] and
/// [`FactorOutcome::contributes`], which keeps the score equal to the
/// reason weight by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorOutcome {
    score: u32,
    reason: Option<PriorityReason>,
}

impl FactorOutcome {
    /// The factor does not apply to this item.
    pub fn none() -> Self {
        Self {
            score: 0,
            reason: None,
        }
    }

    /// The factor contributes `weight` points, explained by `label`.
    pub fn contributes(kind: ReasonKind, label: impl Into<String>, weight: u32) -> Self {
        Self {
            score: weight,
            reason: Some(PriorityReason {
                kind,
                label: label.into(),
                weight,
            }),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reason(&self) -> Option<&PriorityReason> {
        self.reason.as_ref()
    }

    pub(crate) fn into_reason(self) -> Option<PriorityReason> {
        self.reason
    }
}

/// One isolated urgency signal.
///
/// Implementations must be pure: no I/O, no randomness, no shared mutable
/// state. The reference date is threaded in explicitly so the same item
/// scores identically under the same calendar day, which is what makes the
/// engines safe to share across threads and trivial to test. A factor that
/// does not apply returns a zero outcome rather than failing.
pub trait FactorExtractor<T>: Send + Sync {
    fn evaluate(&self, item: &T, today: NaiveDate) -> FactorOutcome;
}

impl<T, F> FactorExtractor<T> for F
where
    F: Fn(&T, NaiveDate) -> FactorOutcome + Send + Sync,
{
    fn evaluate(&self, item: &T, today: NaiveDate) -> FactorOutcome {
        self(item, today)
    }
}

pub type BoxedExtractor<T> = Box<dyn FactorExtractor<T>>;
