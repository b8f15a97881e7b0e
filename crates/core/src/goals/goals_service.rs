use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::goals_codec::{decode_goals, encode_goals};
use super::goals_model::{
    check_amount_scale, ContributionOutcome, Goal, GoalId, GoalStats, GoalTotals, GoalUpdate,
    GoalView, HistorySort, NewGoal,
};
use super::goals_progress;
use super::goals_traits::GoalServiceTrait;
use crate::constants::{
    DEFAULT_STORAGE_KEY, SEED_GOAL_DESCRIPTION, SEED_GOAL_NAME, SEED_GOAL_SAVED, SEED_GOAL_TARGET,
};
use crate::errors::{Error, Result, ValidationError};
use crate::storage::KeyValueStoreTrait;
use crate::utils::{Clock, SystemClock};

#[derive(Debug, Default)]
struct GoalCollection {
    goals: Vec<Goal>,
    /// Highest id ever issued or loaded. Never decreases, so deleted ids are
    /// not handed out again.
    last_id: GoalId,
}

/// Owner of the goal collection.
///
/// Every mutation works on a copy of the collection, persists the copy, and
/// only then swaps it in. The write lock is held for the whole sequence so
/// writes reach storage in the order they were applied.
pub struct GoalStore {
    storage: Arc<dyn KeyValueStoreTrait>,
    clock: Arc<dyn Clock>,
    storage_key: String,
    state: RwLock<GoalCollection>,
}

impl GoalStore {
    /// Creates an empty store over `storage`. Call
    /// [`GoalServiceTrait::initialize`] to load persisted goals.
    pub fn new(storage: Arc<dyn KeyValueStoreTrait>) -> Self {
        GoalStore {
            storage,
            clock: Arc::new(SystemClock),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            state: RwLock::new(GoalCollection::default()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn read_state(&self) -> RwLockReadGuard<'_, GoalCollection> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, GoalCollection> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue_id(&self, last_id: GoalId) -> GoalId {
        self.clock.now_millis().max(last_id.saturating_add(1))
    }

    fn persist(&self, goals: &[Goal]) -> Result<()> {
        let payload = encode_goals(goals)?;
        self.storage
            .set(&self.storage_key, &payload)
            .inspect_err(|e| error!("Failed to persist {} goals: {}", goals.len(), e))
    }

    /// Runs `op` against a working copy of the collection and commits the
    /// copy only if both `op` and the save succeed.
    fn mutate<T>(&self, op: impl FnOnce(&mut GoalCollection) -> Result<T>) -> Result<T> {
        let mut state = self.write_state();
        let mut next = GoalCollection {
            goals: state.goals.clone(),
            last_id: state.last_id,
        };

        let result = op(&mut next)?;
        self.persist(&next.goals)?;
        *state = next;
        Ok(result)
    }

    fn seed_goal(&self, last_id: GoalId) -> Goal {
        Goal {
            id: self.issue_id(last_id),
            name: SEED_GOAL_NAME.to_string(),
            target: Decimal::from(SEED_GOAL_TARGET),
            saved: Decimal::from(SEED_GOAL_SAVED),
            description: SEED_GOAL_DESCRIPTION.to_string(),
            completed_at: None,
        }
    }

    /// Loads the stored collection. `None` means nothing is stored; read or
    /// decode problems degrade to an empty collection.
    fn load_stored(&self) -> Option<Vec<Goal>> {
        let payload = match self.storage.get(&self.storage_key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read stored goals, starting empty: {}", e);
                return Some(Vec::new());
            }
        };

        match decode_goals(&payload) {
            Ok(goals) => Some(retain_valid(goals)),
            Err(e) => {
                warn!("Stored goals are unreadable, starting empty: {}", e);
                Some(Vec::new())
            }
        }
    }
}

/// Drops records that break the amount invariants or reuse an id.
fn retain_valid(goals: Vec<Goal>) -> Vec<Goal> {
    let mut seen = HashSet::with_capacity(goals.len());
    goals
        .into_iter()
        .filter(|goal| {
            if let Err(e) = goal.check_invariants() {
                warn!("Skipping stored goal {}: {}", goal.id, e);
                return false;
            }
            if !seen.insert(goal.id) {
                warn!("Skipping stored goal with duplicate id {}", goal.id);
                return false;
            }
            true
        })
        .collect()
}

fn find_index(goals: &[Goal], id: GoalId) -> Result<usize> {
    goals
        .iter()
        .position(|g| g.id == id)
        .ok_or(Error::NotFound { id })
}

impl GoalServiceTrait for GoalStore {
    fn initialize(&self) -> Result<()> {
        match self.load_stored() {
            Some(goals) => {
                let mut state = self.write_state();
                let max_loaded = goals.iter().map(|g| g.id).max().unwrap_or_default();
                state.last_id = state.last_id.max(max_loaded);
                debug!("Loaded {} goals from '{}'", goals.len(), self.storage_key);
                state.goals = goals;
                Ok(())
            }
            None => {
                debug!("No stored goals under '{}', seeding demo goal", self.storage_key);
                self.mutate(|collection| {
                    let seed = self.seed_goal(collection.last_id);
                    collection.last_id = seed.id;
                    collection.goals = vec![seed];
                    Ok(())
                })
            }
        }
    }

    fn add_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        self.mutate(|collection| {
            let id = self.issue_id(collection.last_id);
            let completed_at = (new_goal.saved >= new_goal.target).then(|| self.clock.now_millis());
            let goal = Goal {
                id,
                name: new_goal.name.trim().to_string(),
                target: new_goal.target,
                saved: new_goal.saved,
                description: new_goal.description.trim().to_string(),
                completed_at,
            };
            collection.last_id = id;
            collection.goals.push(goal.clone());
            debug!("Added goal {} '{}'", goal.id, goal.name);
            Ok(goal)
        })
    }

    fn update_goal(&self, id: GoalId, update: GoalUpdate) -> Result<Goal> {
        self.mutate(|collection| {
            let idx = find_index(&collection.goals, id)?;
            let goal = &mut collection.goals[idx];
            update.validate(goal.saved)?;

            goal.name = update.name.trim().to_string();
            goal.target = update.target;
            goal.description = update.description.trim().to_string();
            debug!("Updated goal {}", id);
            Ok(goal.clone())
        })
    }

    fn contribute(&self, id: GoalId, amount: Decimal) -> Result<ContributionOutcome> {
        self.mutate(|collection| {
            let idx = find_index(&collection.goals, id)?;
            let goal = &mut collection.goals[idx];

            if amount <= Decimal::ZERO {
                return Err(ValidationError::InvalidAmount(amount).into());
            }
            check_amount_scale(amount)?;

            let new_saved = match goal.saved.checked_add(amount) {
                Some(total) if total <= goal.target => total,
                _ => {
                    return Err(ValidationError::ExceedsRemaining {
                        max_addable: goal.remaining(),
                    }
                    .into())
                }
            };

            let was_completed = goal.is_completed();
            goal.saved = new_saved;
            let became_completed = !was_completed && goal.is_completed();
            if goal.is_completed() && goal.completed_at.is_none() {
                goal.completed_at = Some(self.clock.now_millis());
            }

            debug!(
                "Contributed {} to goal {} (saved {} of {})",
                amount, id, goal.saved, goal.target
            );
            Ok(ContributionOutcome {
                goal: goal.clone(),
                became_completed,
            })
        })
    }

    fn delete_goal(&self, id: GoalId) -> Result<()> {
        self.mutate(|collection| {
            let idx = find_index(&collection.goals, id)?;
            collection.goals.remove(idx);
            debug!("Deleted goal {}", id);
            Ok(())
        })
    }

    fn clear_all_goals(&self) -> Result<()> {
        let mut state = self.write_state();
        self.storage
            .remove(&self.storage_key)
            .inspect_err(|e| error!("Failed to clear stored goals: {}", e))?;
        debug!("Cleared {} goals", state.goals.len());
        state.goals.clear();
        Ok(())
    }

    fn get_goals(&self) -> Vec<Goal> {
        self.read_state().goals.clone()
    }

    fn get_goal(&self, id: GoalId) -> Result<Goal> {
        let state = self.read_state();
        let idx = find_index(&state.goals, id)?;
        Ok(state.goals[idx].clone())
    }

    fn totals(&self) -> GoalTotals {
        goals_progress::totals(&self.read_state().goals)
    }

    fn stats(&self) -> GoalStats {
        goals_progress::stats(&self.read_state().goals)
    }

    fn list_goals(&self, view: GoalView, sort: HistorySort) -> Vec<Goal> {
        goals_progress::select_view(&self.read_state().goals, view, sort)
    }
}
