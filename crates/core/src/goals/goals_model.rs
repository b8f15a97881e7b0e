//! Goals domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goals_progress::percent;
use crate::constants::{MAX_AMOUNT, MAX_AMOUNT_SCALE};
use crate::errors::ValidationError;

/// Goal identifier. Creation-time millisecond stamp, strictly increasing
/// within a store and never reused.
pub type GoalId = i64;

/// Domain model representing a savings goal.
///
/// `completed_at` is the only completion marker that gets persisted; it is
/// omitted from the serialized record until the goal first reaches its target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Goal {
    /// True when the saved amount has reached the target.
    pub fn is_completed(&self) -> bool {
        self.saved >= self.target
    }

    /// Largest contribution the goal can still accept.
    pub fn remaining(&self) -> Decimal {
        self.target
            .saturating_sub(self.saved)
            .max(Decimal::ZERO)
    }

    /// Progress towards the target, see [`percent`].
    pub fn percent(&self) -> Decimal {
        percent(self.saved, self.target)
    }

    /// Checks the amount invariants a persisted goal must satisfy.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_amounts(self.target, self.saved)
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
    #[serde(default)]
    pub description: String,
}

impl NewGoal {
    pub fn new(
        name: impl Into<String>,
        target: Decimal,
        saved: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            saved,
            description: description.into(),
        }
    }

    /// Validates the new goal data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_amounts(self.target, self.saved)
    }
}

/// Input model for editing an existing goal. The saved amount is not editable
/// here; it only moves through contributions.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: String,
    pub target: Decimal,
    #[serde(default)]
    pub description: String,
}

impl GoalUpdate {
    pub fn new(name: impl Into<String>, target: Decimal, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target,
            description: description.into(),
        }
    }

    /// Validates the update against the goal's current saved amount.
    pub fn validate(&self, current_saved: Decimal) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        if self.target <= Decimal::ZERO {
            return Err(ValidationError::InvalidTarget(self.target));
        }
        check_amount_bounds(self.target)?;
        if self.target < current_saved {
            return Err(ValidationError::TargetBelowSaved {
                target: self.target,
                saved: current_saved,
            });
        }
        Ok(())
    }
}

/// Result of a successful contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionOutcome {
    pub goal: Goal,
    /// True when this contribution moved the goal from incomplete to complete.
    pub became_completed: bool,
}

/// Sums across the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTotals {
    pub total_saved: Decimal,
    pub total_target: Decimal,
}

/// Dashboard summary of the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub goal_count: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub overall_percent: Decimal,
}

/// Which slice of the collection a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalView {
    /// Goals still below their target, in creation order
    #[default]
    Active,
    /// Completed goals, ordered by a [`HistorySort`]
    History,
}

/// Ordering applied to the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistorySort {
    /// Newest completion first; goals without a completion stamp use their id
    #[default]
    Recent,
    /// Largest target first
    Highest,
    /// Smallest target first
    Lowest,
}

impl HistorySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistorySort::Recent => "recent",
            HistorySort::Highest => "highest",
            HistorySort::Lowest => "lowest",
        }
    }
}

impl fmt::Display for HistorySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistorySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(HistorySort::Recent),
            "highest" => Ok(HistorySort::Highest),
            "lowest" => Ok(HistorySort::Lowest),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(())
}

fn validate_amounts(target: Decimal, saved: Decimal) -> Result<(), ValidationError> {
    if target <= Decimal::ZERO {
        return Err(ValidationError::InvalidTarget(target));
    }
    check_amount_bounds(target)?;
    if saved < Decimal::ZERO {
        return Err(ValidationError::InvalidSavedAmount(saved));
    }
    check_amount_bounds(saved)?;
    if saved > target {
        return Err(ValidationError::SavedExceedsTarget { saved, target });
    }
    Ok(())
}

/// Rejects amounts the stored format cannot reproduce exactly.
fn check_amount_bounds(amount: Decimal) -> Result<(), ValidationError> {
    let max = Decimal::from(MAX_AMOUNT);
    if amount >= max {
        return Err(ValidationError::AmountTooLarge { amount, max });
    }
    check_amount_scale(amount)
}

pub(crate) fn check_amount_scale(amount: Decimal) -> Result<(), ValidationError> {
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(ValidationError::TooManyDecimals {
            amount,
            max_scale: MAX_AMOUNT_SCALE,
        });
    }
    Ok(())
}
