//! Goals domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Time unit of a user's declared savings horizon. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// Domain model representing a savings goal.
///
/// A goal owns its deposits: they are created on user deposit actions,
/// removed on explicit deletion, and deleted with the goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub start_date: DateTime<Utc>,
    /// Weekdays (0 = Sunday .. 6 = Saturday) on which deposits are planned,
    /// normalized to sorted unique values. Empty means a deposit is assumed
    /// every day of the week.
    pub selected_days: Vec<u8>,
    /// The user's original per-deposit plan, kept for display only. The
    /// adaptive estimator never reads it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_daily_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    /// Deposits ordered by creation.
    pub deposits: Vec<Deposit>,
}

impl Goal {
    /// Sum of all deposit amounts.
    pub fn current_savings(&self) -> Decimal {
        self.deposits.iter().map(|d| d.amount).sum()
    }

    /// Amount still missing toward the target, floored at zero.
    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.current_savings()).max(Decimal::ZERO)
    }

    /// Progress toward the target as a percentage, clamped to 100.
    ///
    /// Returns zero for a non-positive target instead of dividing by zero;
    /// the creation invariant normally rules that state out.
    pub fn progress_percent(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let percent = self.current_savings() / self.target_amount * dec!(100);
        percent.min(dec!(100))
    }
}

/// A single deposit toward a goal. Never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub name: String,
    pub target_amount: Decimal,
    pub selected_days: Vec<u8>,
    pub declared_daily_amount: Option<Decimal>,
    pub time_value: Option<u32>,
    pub time_unit: Option<TimeUnit>,
}

/// Input model for updating a goal. The id, start date, and deposit
/// history of the existing goal are preserved.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: Decimal,
    pub selected_days: Vec<u8>,
    pub declared_daily_amount: Option<Decimal>,
    pub time_value: Option<u32>,
    pub time_unit: Option<TimeUnit>,
}

/// Input model for recording a deposit. The date defaults to the time of
/// recording when absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDeposit {
    pub id: Option<String>,
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
}

/// Point-in-time financial summary of a goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub current_savings: Decimal,
    pub remaining_amount: Decimal,
    pub progress_percent: Decimal,
    /// Days until the projected completion date, when an estimate exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<u64>,
}
