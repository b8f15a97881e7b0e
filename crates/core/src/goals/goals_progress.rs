//! Pure progress computations over goals. Nothing here touches storage.

use rust_decimal::{Decimal, RoundingStrategy};

use super::goals_model::{Goal, GoalStats, GoalTotals, GoalView, HistorySort};
use crate::constants::PERCENT_PRECISION;

/// Percentage of `target` covered by `saved`.
///
/// Rounded half-up to one decimal place and clamped to `[0, 100]`. A zero
/// target yields `0`.
pub fn percent(saved: Decimal, target: Decimal) -> Decimal {
    if target.is_zero() {
        return Decimal::ZERO;
    }

    let raw = match saved
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    {
        Some(value) => value,
        // Only reachable with extreme magnitudes; the sign decides which bound applies.
        None if saved.is_sign_negative() != target.is_sign_negative() => Decimal::ZERO,
        None => Decimal::ONE_HUNDRED,
    };

    raw.round_dp_with_strategy(PERCENT_PRECISION, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Sum of saved and target amounts across `goals`, saturating at
/// `Decimal::MAX`.
pub fn totals(goals: &[Goal]) -> GoalTotals {
    goals.iter().fold(GoalTotals::default(), |mut acc, goal| {
        acc.total_saved = acc.total_saved.saturating_add(goal.saved);
        acc.total_target = acc.total_target.saturating_add(goal.target);
        acc
    })
}

/// Goals whose completion state equals `want_completed`, in input order.
pub fn filter_by_completion(goals: &[Goal], want_completed: bool) -> Vec<Goal> {
    goals
        .iter()
        .filter(|goal| goal.is_completed() == want_completed)
        .cloned()
        .collect()
}

/// Orders goals for the history view. The sort is stable, so ties keep
/// their incoming relative order.
pub fn sort_history(mut goals: Vec<Goal>, key: HistorySort) -> Vec<Goal> {
    match key {
        HistorySort::Recent => goals.sort_by(|a, b| recency_key(b).cmp(&recency_key(a))),
        HistorySort::Highest => goals.sort_by(|a, b| b.target.cmp(&a.target)),
        HistorySort::Lowest => goals.sort_by(|a, b| a.target.cmp(&b.target)),
    }
    goals
}

/// The list a front end renders for `view`. Active goals stay in creation
/// order; `sort` only applies to the history view.
pub fn select_view(goals: &[Goal], view: GoalView, sort: HistorySort) -> Vec<Goal> {
    match view {
        GoalView::Active => filter_by_completion(goals, false),
        GoalView::History => sort_history(filter_by_completion(goals, true), sort),
    }
}

pub fn stats(goals: &[Goal]) -> GoalStats {
    let GoalTotals {
        total_saved,
        total_target,
    } = totals(goals);
    let completed_count = goals.iter().filter(|g| g.is_completed()).count();

    GoalStats {
        goal_count: goals.len(),
        completed_count,
        pending_count: goals.len() - completed_count,
        total_saved,
        total_target,
        overall_percent: percent(total_saved, total_target),
    }
}

fn recency_key(goal: &Goal) -> i64 {
    goal.completed_at.unwrap_or(goal.id)
}
