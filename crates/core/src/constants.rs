/// Deposits per week assumed when a goal has no explicit cadence
pub const DEFAULT_DEPOSITS_PER_WEEK: u32 = 7;

/// Days in a projection week
pub const DAYS_PER_WEEK: u64 = 7;

/// Day threshold for the month display bucket
pub const DAYS_PER_MONTH_BUCKET: u64 = 30;

/// Day threshold for the year display bucket
pub const DAYS_PER_YEAR_BUCKET: u64 = 365;
