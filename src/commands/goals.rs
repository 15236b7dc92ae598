// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::commands::Session;
use crate::goals::{apply_increment, apply_manual_edit, compute_progress, is_completed, overview};
use crate::models::{Goal, GoalProgress};
use crate::query::{GoalSortKey, GoalStatus, filter_goals, sort_goals};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("bump", sub)) => bump(session, sub)?,
        Some(("edit", sub)) => edit(session, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRow {
    #[serde(flatten)]
    pub goal: Goal,
    /// `None` for a goal without a positive target.
    pub progress: Option<GoalProgress>,
    pub completed: bool,
}

impl From<Goal> for GoalRow {
    fn from(goal: Goal) -> Self {
        let progress = match compute_progress(&goal) {
            Ok(p) => Some(p),
            Err(err) => {
                tracing::warn!(goal = %goal.id, "{}", err);
                None
            }
        };
        Self {
            completed: is_completed(&goal),
            progress,
            goal,
        }
    }
}

pub fn query_rows(goals: &[Goal], sub: &clap::ArgMatches) -> Result<Vec<GoalRow>> {
    let status: GoalStatus = sub
        .get_one::<String>("status")
        .map(|s| s.parse::<GoalStatus>())
        .transpose()?
        .unwrap_or_default();
    let key: GoalSortKey = sub
        .get_one::<String>("sort")
        .map(|s| s.parse::<GoalSortKey>())
        .transpose()?
        .unwrap_or_default();
    let sorted = sort_goals(&filter_goals(goals, status), key);
    Ok(sorted.into_iter().map(GoalRow::from).collect())
}

fn row_cells(r: &GoalRow) -> Vec<String> {
    let (percent, remaining) = match &r.progress {
        Some(p) => (format!("{}%", p.percent), fmt_money(&p.remaining)),
        None => ("n/a".to_string(), "n/a".to_string()),
    };
    vec![
        r.goal.id.clone(),
        r.goal.name.clone(),
        fmt_money(&r.goal.saved),
        fmt_money(&r.goal.target),
        percent,
        remaining,
        r.goal.deadline.map(|d| d.to_string()).unwrap_or_default(),
    ]
}

const HEADERS: [&str; 7] = ["ID", "Goal", "Saved", "Target", "Progress", "Remaining", "Deadline"];

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = session.goals()?;
    let rows = query_rows(&goals, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!("{}", pretty_table(&HEADERS, rows.iter().map(row_cells).collect()));
        let o = overview(&goals);
        println!(
            "{} goal(s), {} completed: {} of {} ({}%)",
            o.goals,
            o.completed,
            fmt_money(&o.total_saved),
            fmt_money(&o.total_target),
            o.percent
        );
    }
    Ok(())
}

fn find_goal<'a>(goals: &'a [Goal], sub: &clap::ArgMatches) -> Result<&'a Goal> {
    let id = sub
        .get_one::<String>("id")
        .map(|s| s.trim())
        .context("--id is required")?;
    goals
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("Goal '{}' not found", id))
}

fn print_goal(sub: &clap::ArgMatches, before: &Goal, after: Goal) -> Result<()> {
    let row = GoalRow::from(after);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &row)? {
        println!(
            "{}: {} -> {}",
            row.goal.name,
            fmt_money(&before.saved),
            fmt_money(&row.goal.saved)
        );
        println!("{}", pretty_table(&HEADERS, vec![row_cells(&row)]));
    }
    Ok(())
}

/// The updated goal for `goals bump`; nothing is written back.
pub fn bumped(session: &Session, goals: &[Goal], sub: &clap::ArgMatches) -> Result<Goal> {
    let goal = find_goal(goals, sub)?;
    let fraction = match sub.get_one::<u32>("percent") {
        Some(p) => Decimal::from(*p) / Decimal::ONE_HUNDRED,
        None => session.settings.increment_fraction(),
    };
    Ok(apply_increment(goal, fraction))
}

/// The updated goal for `goals edit`; fails when the amount is out of range.
pub fn edited(goals: &[Goal], sub: &clap::ArgMatches) -> Result<Goal> {
    let goal = find_goal(goals, sub)?;
    let raw = sub.get_one::<String>("saved").context("--saved is required")?;
    let amount = parse_decimal(raw.trim())?;
    Ok(apply_manual_edit(goal, amount)?)
}

fn bump(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let goals = session.goals()?;
    let updated = bumped(session, &goals, sub)?;
    print_goal(sub, find_goal(&goals, sub)?, updated)
}

fn edit(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let goals = session.goals()?;
    let updated = edited(&goals, sub)?;
    print_goal(sub, find_goal(&goals, sub)?, updated)
}
