//! Goal service trait.
//!
//! Presentation layers hold an `Arc<dyn GoalServiceTrait>` and never touch the
//! collection directly. All mutations are validated here and are
//! all-or-nothing: a rejected call leaves every goal exactly as it was.

use rust_decimal::Decimal;

use super::goals_model::{
    ContributionOutcome, Goal, GoalId, GoalStats, GoalTotals, GoalUpdate, GoalView, HistorySort,
    NewGoal,
};
use crate::errors::Result;

pub trait GoalServiceTrait: Send + Sync {
    /// Loads the collection from storage, seeding the demonstration goal when
    /// nothing has been stored yet.
    fn initialize(&self) -> Result<()>;

    /// Validates and appends a new goal under a freshly issued id.
    fn add_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Edits name, target and description. `saved` and `completed_at` are
    /// left untouched.
    fn update_goal(&self, id: GoalId, update: GoalUpdate) -> Result<Goal>;

    /// Adds `amount` to a goal's saved balance.
    fn contribute(&self, id: GoalId, amount: Decimal) -> Result<ContributionOutcome>;

    /// Removes a goal. Unknown ids are reported as not found.
    fn delete_goal(&self, id: GoalId) -> Result<()>;

    /// Drops every goal and the stored value.
    fn clear_all_goals(&self) -> Result<()>;

    /// Snapshot of the collection in creation order.
    fn get_goals(&self) -> Vec<Goal>;

    fn get_goal(&self, id: GoalId) -> Result<Goal>;

    fn totals(&self) -> GoalTotals;

    fn stats(&self) -> GoalStats;

    /// Goals for a front-end list view.
    fn list_goals(&self, view: GoalView, sort: HistorySort) -> Vec<Goal>;
}
