use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::goals::goals_model::{Deposit, Goal, GoalProgress, GoalUpdate, NewDeposit, NewGoal};
use crate::projection::Estimate;

/// Trait for goal repository operations.
///
/// The backing store is a key-value style store keyed by goal id. A goal
/// carries its deposits, so the whole aggregate is the unit of storage.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}

/// Trait for goal service operations.
///
/// There is no "current goal" state anywhere in the core; callers identify
/// the goal on every call and capture `now` once per logical operation.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
    async fn add_deposit(&self, goal_id: &str, new_deposit: NewDeposit) -> Result<Deposit>;
    async fn delete_deposit(&self, goal_id: &str, deposit_id: &str) -> Result<usize>;
    fn get_estimate(&self, goal_id: &str, now: DateTime<Utc>) -> Result<Estimate>;
    fn get_progress(&self, goal_id: &str, now: DateTime<Utc>) -> Result<GoalProgress>;
}
