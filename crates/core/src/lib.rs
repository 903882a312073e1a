//! Goalstash Core - Domain entities, services, and the goal projection engine.
//!
//! This crate contains the core business logic for tracking savings goals
//! funded by recurring weekly deposits. It is storage-agnostic: persistence
//! is behind [`goals::GoalRepositoryTrait`], implemented by the embedding
//! application, which stores goal aggregates keyed by goal id.
//!
//! The projection engine in [`projection`] is pure: every function maps
//! (goal, deposit history, "now") to a result with no I/O and no state
//! across calls.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod projection;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
