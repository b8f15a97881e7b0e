//! Goals module - domain models, the goal store, progress computations and
//! the stored-collection format.

mod goals_codec;
mod goals_model;
mod goals_progress;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_model_tests;

pub use goals_codec::{decode_goals, encode_goals};
pub use goals_model::{
    ContributionOutcome, Goal, GoalId, GoalStats, GoalTotals, GoalUpdate, GoalView, HistorySort,
    NewGoal,
};
pub use goals_progress::{filter_by_completion, percent, select_view, sort_history, stats, totals};
pub use goals_service::GoalStore;
pub use goals_traits::GoalServiceTrait;
