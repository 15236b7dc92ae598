// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::{EngineError, ResultEngine};
use crate::models::{Goal, GoalOverview, GoalProgress};
use crate::utils::{round_percent, saturating_sum};

/// Display progress of a goal. The true `saved` amount may overshoot the
/// target; the percentage stops at 100.
pub fn compute_progress(goal: &Goal) -> ResultEngine<GoalProgress> {
    if goal.target <= Decimal::ZERO {
        return Err(EngineError::InvalidGoal(format!(
            "goal '{}' has non-positive target {}",
            goal.name, goal.target
        )));
    }
    let percent = round_percent(goal.saved, goal.target).clamp(0, 100);
    let remaining = goal.target.saturating_sub(goal.saved).max(Decimal::ZERO);
    Ok(GoalProgress { percent, remaining })
}

/// Add `fraction` of the target to `saved`, stopping at the target.
///
/// `saved` never goes down: a goal that already overshoots keeps its amount
/// and negative fractions add nothing. A step too large to represent fills
/// the goal.
pub fn apply_increment(goal: &Goal, fraction: Decimal) -> Goal {
    let fraction = if fraction < Decimal::ZERO {
        tracing::warn!(%fraction, goal = %goal.id, "ignoring negative increment");
        Decimal::ZERO
    } else {
        fraction
    };
    let bumped = goal
        .target
        .checked_mul(fraction)
        .and_then(|step| goal.saved.checked_add(step))
        .map_or(goal.target, |b| b.min(goal.target));
    Goal {
        saved: bumped.max(goal.saved),
        ..goal.clone()
    }
}

/// Set `saved` directly. Only `0..=target` is accepted; on failure the
/// caller's goal is left as it was.
pub fn apply_manual_edit(goal: &Goal, new_saved: Decimal) -> ResultEngine<Goal> {
    if new_saved < Decimal::ZERO || new_saved > goal.target {
        return Err(EngineError::InvalidAmount(format!(
            "{} is outside 0..={} for goal '{}'",
            new_saved, goal.target, goal.name
        )));
    }
    Ok(Goal {
        saved: new_saved,
        ..goal.clone()
    })
}

pub fn is_completed(goal: &Goal) -> bool {
    goal.saved >= goal.target
}

pub fn overview(goals: &[Goal]) -> GoalOverview {
    let total_saved = saturating_sum(goals.iter().map(|g| g.saved));
    let total_target = saturating_sum(goals.iter().map(|g| g.target));
    GoalOverview {
        goals: goals.len(),
        completed: goals.iter().filter(|g| is_completed(g)).count(),
        total_saved,
        total_target,
        percent: round_percent(total_saved, total_target).clamp(0, 100),
    }
}
