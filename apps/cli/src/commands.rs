//! Goal subcommands. User input is parsed into decimals here; the store only
//! ever sees validated numbers.

use std::fmt::Write as _;
use std::str::FromStr;

use clap::Subcommand;
use rust_decimal::Decimal;
use sparksave_core::utils::{format_currency, millis_to_utc};
use sparksave_core::{
    Goal, GoalId, GoalServiceTrait, GoalStats, GoalUpdate, GoalView, HistorySort, NewGoal,
};

#[derive(Debug, Subcommand)]
pub enum GoalCommand {
    /// List active goals, or completed ones with --history.
    List {
        /// Show completed goals instead of active ones.
        #[arg(long)]
        history: bool,
        /// History ordering: recent, highest or lowest.
        #[arg(long, default_value = "recent")]
        sort: HistorySort,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Create a goal.
    Add {
        name: String,
        #[arg(value_parser = parse_amount)]
        target: Decimal,
        /// Amount already saved.
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        saved: Decimal,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change a goal's name, target or description.
    Edit {
        id: GoalId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_amount)]
        target: Option<Decimal>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add money to a goal.
    Contribute {
        id: GoalId,
        #[arg(value_parser = parse_amount)]
        amount: Decimal,
    },
    /// Delete a goal.
    Delete { id: GoalId },
    /// Show totals across all goals.
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Delete every goal. The demo goal returns on next start.
    Clear {
        /// Required to actually clear.
        #[arg(long)]
        yes: bool,
    },
}

/// Parses a user-entered amount. Thousands separators and a leading peso
/// sign are accepted.
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('₱')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err("amount is required".to_string());
    }
    Decimal::from_str(&cleaned).map_err(|_| format!("'{}' is not a valid amount", raw.trim()))
}

/// Runs one command and returns the text to print.
pub fn execute(service: &dyn GoalServiceTrait, command: GoalCommand) -> anyhow::Result<String> {
    match command {
        GoalCommand::List {
            history,
            sort,
            json,
        } => {
            let view = if history {
                GoalView::History
            } else {
                GoalView::Active
            };
            let goals = service.list_goals(view, sort);
            if json {
                return Ok(serde_json::to_string_pretty(&goals)?);
            }
            Ok(render_goal_list(&goals, view))
        }
        GoalCommand::Add {
            name,
            target,
            saved,
            description,
        } => {
            let goal = service.add_goal(NewGoal::new(name, target, saved, description))?;
            Ok(format!("Added goal {}\n{}", goal.id, render_goal(&goal)))
        }
        GoalCommand::Edit {
            id,
            name,
            target,
            description,
        } => {
            let current = service.get_goal(id)?;
            let update = GoalUpdate::new(
                name.unwrap_or(current.name),
                target.unwrap_or(current.target),
                description.unwrap_or(current.description),
            );
            let goal = service.update_goal(id, update)?;
            Ok(format!("Updated goal {}\n{}", goal.id, render_goal(&goal)))
        }
        GoalCommand::Contribute { id, amount } => {
            let outcome = service.contribute(id, amount)?;
            let mut out = format!(
                "Added {} to '{}'\n{}",
                format_currency(amount),
                outcome.goal.name,
                render_goal(&outcome.goal)
            );
            if outcome.became_completed {
                let _ = write!(out, "\nGoal reached! '{}' is complete.", outcome.goal.name);
            }
            Ok(out)
        }
        GoalCommand::Delete { id } => {
            let goal = service.get_goal(id)?;
            service.delete_goal(id)?;
            Ok(format!("Deleted goal {} '{}'", id, goal.name))
        }
        GoalCommand::Stats { json } => {
            let stats = service.stats();
            if json {
                return Ok(serde_json::to_string_pretty(&stats)?);
            }
            Ok(render_stats(&stats))
        }
        GoalCommand::Clear { yes } => {
            if !yes {
                return Ok("Nothing cleared. Pass --yes to delete every goal.".to_string());
            }
            service.clear_all_goals()?;
            Ok("All goals cleared.".to_string())
        }
    }
}

fn render_goal(goal: &Goal) -> String {
    let mut line = format!(
        "[{}] {}  {} / {}  ({}%)",
        goal.id,
        goal.name,
        format_currency(goal.saved),
        format_currency(goal.target),
        goal.percent().normalize()
    );
    if goal.is_completed() {
        match goal.completed_at.and_then(millis_to_utc) {
            Some(done_at) => {
                let _ = write!(line, "  done {}", done_at.format("%Y-%m-%d"));
            }
            None => line.push_str("  done"),
        }
    } else {
        let _ = write!(line, "  {} to go", format_currency(goal.remaining()));
    }
    if !goal.description.is_empty() {
        let _ = write!(line, "\n    {}", goal.description);
    }
    line
}

fn render_goal_list(goals: &[Goal], view: GoalView) -> String {
    if goals.is_empty() {
        return match view {
            GoalView::Active => "No active goals.".to_string(),
            GoalView::History => "No completed goals yet.".to_string(),
        };
    }
    goals.iter().map(render_goal).collect::<Vec<_>>().join("\n")
}

fn render_stats(stats: &GoalStats) -> String {
    format!(
        "Goals: {} ({} completed, {} in progress)\nSaved: {} of {} ({}%)",
        stats.goal_count,
        stats.completed_count,
        stats.pending_count,
        format_currency(stats.total_saved),
        format_currency(stats.total_target),
        stats.overall_percent.normalize()
    )
}
