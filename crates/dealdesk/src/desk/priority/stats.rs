use serde::{Deserialize, Serialize};

/// Score boundaries separating the urgency bands.
///
/// Every desk engine shares [`BucketThresholds::default`] unless a domain
/// overrides it at construction. Fields must be ordered
/// `critical > high > medium`; the bands are evaluated top down so the
/// boundaries are exhaustive and non-overlapping by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketThresholds {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            critical: 70,
            high: 40,
            medium: 15,
        }
    }
}

impl BucketThresholds {
    pub const fn band(self, score: u32) -> UrgencyBand {
        if score >= self.critical {
            UrgencyBand::Critical
        } else if score >= self.high {
            UrgencyBand::High
        } else if score >= self.medium {
            UrgencyBand::Medium
        } else {
            UrgencyBand::Low
        }
    }
}

/// Coarse urgency classification used for dashboard rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyBand {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyBand {
    pub const fn label(self) -> &'static str {
        match self {
            UrgencyBand::Critical => "critical",
            UrgencyBand::High => "high",
            UrgencyBand::Medium => "medium",
            UrgencyBand::Low => "low",
        }
    }
}

/// Per-band counts over a ranked collection.
///
/// The band counts always sum to `total`: every item falls into exactly
/// one band.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxStats {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl InboxStats {
    pub(super) fn record(&mut self, band: UrgencyBand) {
        match band {
            UrgencyBand::Critical => self.critical += 1,
            UrgencyBand::High => self.high += 1,
            UrgencyBand::Medium => self.medium += 1,
            UrgencyBand::Low => self.low += 1,
        }
        self.total += 1;
    }
}
