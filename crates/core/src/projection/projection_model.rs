//! Projection output models. Derived fresh on every query, never persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The structured result of a time-to-goal projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Deposits still needed to cover the remaining amount.
    pub remaining_deposits_needed: u64,
    pub deposits_per_week: u32,
    pub total_weeks: u64,
    pub total_days: u64,
    /// Projected completion instant. Absent for prospective estimates,
    /// which have no anchor point yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Human-readable duration, e.g. "3 weeks".
    pub display_text: String,
}

/// Outcome of a projection query.
///
/// `NoEstimate` ("not enough data to project") is a defined outcome and must
/// stay distinguishable from `AlreadyMet`, which is a successful zero-length
/// estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Estimate {
    /// Pre-deposit projection from the user's declared periodic amount.
    Prospective(Projection),
    /// Projection from the running average of recorded deposits.
    Adaptive(Projection),
    /// The target has already been reached.
    AlreadyMet(Projection),
    /// Insufficient data to project.
    NoEstimate,
}

impl Estimate {
    /// The underlying projection, when one exists.
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            Estimate::Prospective(p) | Estimate::Adaptive(p) | Estimate::AlreadyMet(p) => Some(p),
            Estimate::NoEstimate => None,
        }
    }

    pub fn is_estimate(&self) -> bool {
        !matches!(self, Estimate::NoEstimate)
    }
}
