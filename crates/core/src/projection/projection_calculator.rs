//! Time-to-goal estimation.
//!
//! Deposit and week counts always round up: an estimate must never
//! understate the time required.

use chrono::{DateTime, Duration, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::cadence::deposits_per_week;
use super::duration_format::format_duration;
use super::projection_model::{Estimate, Projection};
use crate::constants::DAYS_PER_WEEK;
use crate::goals::Goal;

const SECONDS_PER_DAY: u64 = 86_400;

/// Ceiling of `amount / per_deposit` as a whole deposit count, saturating
/// at `u64::MAX`. Saturating keeps the conservative bias: an overflowing
/// count must never collapse to a short estimate.
fn deposits_needed(amount: Decimal, per_deposit: Decimal) -> u64 {
    (amount / per_deposit).ceil().to_u64().unwrap_or(u64::MAX)
}

/// Pre-deposit estimate from a user-declared per-deposit amount.
///
/// Returns [`Estimate::NoEstimate`] when either amount is non-positive.
pub fn project_prospective(
    goal_amount: Decimal,
    periodic_amount: Decimal,
    selected_days: &[u8],
) -> Estimate {
    if goal_amount <= Decimal::ZERO || periodic_amount <= Decimal::ZERO {
        return Estimate::NoEstimate;
    }

    let needed = deposits_needed(goal_amount, periodic_amount);

    // With no explicit cadence, one deposit lands every calendar day, so the
    // day count is exact and must not be inflated through whole weeks.
    if selected_days.is_empty() {
        let total_days = needed;
        return Estimate::Prospective(Projection {
            remaining_deposits_needed: needed,
            deposits_per_week: deposits_per_week(selected_days),
            total_weeks: total_days.div_ceil(DAYS_PER_WEEK),
            total_days,
            end_date: None,
            display_text: format_duration(total_days, None, None),
        });
    }

    let per_week = deposits_per_week(selected_days);
    let total_weeks = needed.div_ceil(per_week as u64);
    let total_days = total_weeks.saturating_mul(DAYS_PER_WEEK);

    Estimate::Prospective(Projection {
        remaining_deposits_needed: needed,
        deposits_per_week: per_week,
        total_weeks,
        total_days,
        end_date: None,
        display_text: format_duration(total_days, Some(total_weeks), Some(per_week)),
    })
}

/// Post-deposit estimate from the running average deposit size.
///
/// `now` is captured once by the caller so that the end date and any day
/// counts derived from it come from the same instant.
pub fn project_adaptive(goal: &Goal, now: DateTime<Utc>) -> Estimate {
    let per_week = deposits_per_week(&goal.selected_days);
    let remaining = goal.remaining_amount();

    if remaining <= Decimal::ZERO {
        return Estimate::AlreadyMet(Projection {
            remaining_deposits_needed: 0,
            deposits_per_week: per_week,
            total_weeks: 0,
            total_days: 0,
            end_date: Some(now),
            display_text: format_duration(0, None, None),
        });
    }

    if goal.deposits.is_empty() {
        return Estimate::NoEstimate;
    }

    let avg_deposit = goal.current_savings() / Decimal::from(goal.deposits.len());
    if avg_deposit <= Decimal::ZERO {
        // Unreachable while deposit amounts stay positive, but a bad average
        // must not turn into a division blowup.
        return Estimate::NoEstimate;
    }

    let needed = deposits_needed(remaining, avg_deposit);
    let total_weeks = needed.div_ceil(per_week as u64);
    let total_days = total_weeks.saturating_mul(DAYS_PER_WEEK);

    // The end date advances by whole weeks only, never by walking actual
    // calendar weekdays. Output compatibility depends on this approximation.
    // A week count too large for calendar arithmetic leaves the date absent
    // rather than panicking.
    let end_date = i64::try_from(total_weeks)
        .ok()
        .and_then(Duration::try_weeks)
        .and_then(|delta| now.checked_add_signed(delta));

    Estimate::Adaptive(Projection {
        remaining_deposits_needed: needed,
        deposits_per_week: per_week,
        total_weeks,
        total_days,
        end_date,
        display_text: format_duration(total_days, Some(total_weeks), Some(per_week)),
    })
}

/// Selects the estimation mode for a goal: prospective while no deposits
/// exist and the user declared a per-deposit amount, adaptive otherwise.
pub fn estimate(goal: &Goal, now: DateTime<Utc>) -> Estimate {
    if goal.deposits.is_empty() {
        if let Some(declared) = goal.declared_daily_amount {
            return project_prospective(goal.target_amount, declared, &goal.selected_days);
        }
    }
    project_adaptive(goal, now)
}

/// Days until the adaptive completion date, rounded up and floored at zero.
/// `None` when no estimate is available.
pub fn days_remaining(goal: &Goal, now: DateTime<Utc>) -> Option<u64> {
    let adaptive = project_adaptive(goal, now);
    let end_date = adaptive.projection()?.end_date?;

    let seconds = (end_date - now).num_seconds();
    if seconds <= 0 {
        return Some(0);
    }
    Some((seconds as u64).div_ceil(SECONDS_PER_DAY))
}
