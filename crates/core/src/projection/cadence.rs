//! Deposit cadence normalization.

use std::collections::BTreeSet;

use crate::constants::DEFAULT_DEPOSITS_PER_WEEK;
use crate::goals::GoalError;

/// Highest valid weekday index (Saturday).
const MAX_WEEKDAY: u8 = 6;

/// Deduplicates a raw weekday selection, rejecting values outside 0..=6.
pub fn normalize_selected_days(raw_days: &[u8]) -> Result<BTreeSet<u8>, GoalError> {
    let mut days = BTreeSet::new();
    for &day in raw_days {
        if day > MAX_WEEKDAY {
            return Err(GoalError::InvalidCadence(day));
        }
        days.insert(day);
    }
    Ok(days)
}

/// Deposits per week implied by a weekday selection.
///
/// An empty selection means "assume a deposit every day". Every estimation
/// path resolves its cadence through this one function so the default can
/// never diverge between modes.
pub fn deposits_per_week(selected_days: &[u8]) -> u32 {
    let unique: BTreeSet<u8> = selected_days.iter().copied().collect();
    if unique.is_empty() {
        DEFAULT_DEPOSITS_PER_WEEK
    } else {
        unique.len() as u32
    }
}
