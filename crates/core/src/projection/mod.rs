//! Goal projection engine.
//!
//! Pure calculations mapping a goal, its deposit history, and an explicit
//! "now" to a time-to-completion estimate. Two modes share the same cadence
//! and rounding rules:
//!
//! - **Prospective** - pre-deposit, from the user's declared per-deposit
//!   amount ([`project_prospective`]).
//! - **Adaptive** - once deposits exist, from the running average deposit
//!   size ([`project_adaptive`]).
//!
//! Nothing in here performs I/O or holds state across calls; results are
//! recomputed fresh on every query.

mod cadence;
mod duration_format;
mod projection_calculator;
mod projection_model;

#[cfg(test)]
mod projection_calculator_tests;

pub use cadence::{deposits_per_week, normalize_selected_days};
pub use duration_format::format_duration;
pub use projection_calculator::{days_remaining, estimate, project_adaptive, project_prospective};
pub use projection_model::{Estimate, Projection};
