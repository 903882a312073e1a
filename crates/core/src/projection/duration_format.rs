//! Human-readable duration bucketing.

use crate::constants::{DAYS_PER_MONTH_BUCKET, DAYS_PER_WEEK, DAYS_PER_YEAR_BUCKET};

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Formats a day count into a bucketed display string:
/// days under a week, then weeks, then months (30-day buckets), then
/// years plus leftover months. Singular exactly at 1.
///
/// `total_weeks` is only consulted for the week bucket, so a caller that
/// already rounded through whole weeks displays the same number here.
/// `deposits_per_week` is part of the projection call surface and never
/// affects the output.
pub fn format_duration(
    total_days: u64,
    total_weeks: Option<u64>,
    _deposits_per_week: Option<u32>,
) -> String {
    if total_days < DAYS_PER_WEEK {
        pluralize(total_days, "day")
    } else if total_days < DAYS_PER_MONTH_BUCKET {
        let weeks = total_weeks.unwrap_or_else(|| total_days.div_ceil(DAYS_PER_WEEK));
        pluralize(weeks, "week")
    } else if total_days < DAYS_PER_YEAR_BUCKET {
        pluralize(total_days.div_ceil(DAYS_PER_MONTH_BUCKET), "month")
    } else {
        let years = total_days / DAYS_PER_YEAR_BUCKET;
        let remaining_months = (total_days % DAYS_PER_YEAR_BUCKET).div_ceil(DAYS_PER_MONTH_BUCKET);
        if remaining_months > 0 {
            format!(
                "{} {}",
                pluralize(years, "year"),
                pluralize(remaining_months, "month")
            )
        } else {
            pluralize(years, "year")
        }
    }
}
