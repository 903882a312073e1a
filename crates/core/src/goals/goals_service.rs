use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::goals_errors::GoalError;
use super::goals_model::{Deposit, Goal, GoalProgress, GoalUpdate, NewDeposit, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;
use crate::projection::{self, Estimate};

/// Service for managing savings goals and their deposits.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { repository }
    }

    fn validate_target_amount(target_amount: Decimal) -> Result<()> {
        if target_amount <= Decimal::ZERO {
            return Err(GoalError::InvalidTargetAmount(target_amount).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    /// Lists all goals
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.repository.load_goals()
    }

    /// Retrieves a goal by its ID
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository.get_goal(goal_id)
    }

    /// Creates a new goal with a normalized cadence and a fresh UUID
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        Self::validate_target_amount(new_goal.target_amount)?;
        let selected_days: Vec<u8> = projection::normalize_selected_days(&new_goal.selected_days)?
            .into_iter()
            .collect();

        let goal = Goal {
            id: new_goal
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            start_date: Utc::now(),
            selected_days,
            declared_daily_amount: new_goal.declared_daily_amount,
            time_value: new_goal.time_value,
            time_unit: new_goal.time_unit,
            deposits: Vec::new(),
        };
        debug!("Creating goal '{}' ({})", goal.name, goal.id);

        self.repository.insert_new_goal(goal).await
    }

    /// Updates a goal's plan, preserving its id, start date, and deposits
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        Self::validate_target_amount(update.target_amount)?;
        let selected_days: Vec<u8> = projection::normalize_selected_days(&update.selected_days)?
            .into_iter()
            .collect();

        let existing = self.repository.get_goal(goal_id)?;
        let updated = Goal {
            id: existing.id,
            name: update.name,
            target_amount: update.target_amount,
            start_date: existing.start_date,
            selected_days,
            declared_daily_amount: update.declared_daily_amount,
            time_value: update.time_value,
            time_unit: update.time_unit,
            deposits: existing.deposits,
        };
        debug!("Updating goal '{}' ({})", updated.name, updated.id);

        self.repository.update_goal(updated).await
    }

    /// Deletes a goal and, by ownership, all of its deposits
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        debug!("Deleting goal {}", goal_id_to_delete);
        self.repository.delete_goal(goal_id_to_delete).await
    }

    /// Records a deposit against a goal
    async fn add_deposit(&self, goal_id: &str, new_deposit: NewDeposit) -> Result<Deposit> {
        if new_deposit.amount <= Decimal::ZERO {
            return Err(GoalError::InvalidDepositAmount(new_deposit.amount).into());
        }

        let mut goal = self.repository.get_goal(goal_id)?;
        let deposit = Deposit {
            id: new_deposit
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount: new_deposit.amount,
            date: new_deposit.date.unwrap_or_else(Utc::now),
        };
        debug!(
            "Adding deposit of {} to goal {} ({})",
            deposit.amount, goal_id, deposit.id
        );

        goal.deposits.push(deposit.clone());
        self.repository.update_goal(goal).await?;
        Ok(deposit)
    }

    /// Removes a deposit from a goal, returning the number removed
    async fn delete_deposit(&self, goal_id: &str, deposit_id: &str) -> Result<usize> {
        let mut goal = self.repository.get_goal(goal_id)?;
        let before = goal.deposits.len();
        goal.deposits.retain(|d| d.id != deposit_id);
        let removed = before - goal.deposits.len();

        if removed == 0 {
            return Err(GoalError::DepositNotFound(deposit_id.to_string()).into());
        }
        debug!("Removing deposit {} from goal {}", deposit_id, goal_id);

        self.repository.update_goal(goal).await?;
        Ok(removed)
    }

    /// Computes a fresh time-to-goal estimate for the goal
    fn get_estimate(&self, goal_id: &str, now: DateTime<Utc>) -> Result<Estimate> {
        let goal = self.repository.get_goal(goal_id)?;
        Ok(projection::estimate(&goal, now))
    }

    /// Computes a fresh financial summary for the goal
    fn get_progress(&self, goal_id: &str, now: DateTime<Utc>) -> Result<GoalProgress> {
        let goal = self.repository.get_goal(goal_id)?;
        Ok(GoalProgress {
            current_savings: goal.current_savings(),
            remaining_amount: goal.remaining_amount(),
            progress_percent: goal.progress_percent(),
            days_remaining: projection::days_remaining(&goal, now),
        })
    }
}
