// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtered and sorted views over transaction and goal snapshots.
//!
//! Inputs are borrowed and never reordered in place; each call returns a new
//! `Vec`. All sorts are stable.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::goals::is_completed;
use crate::models::{Goal, Transaction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: TypeFilter,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionSortKey {
    #[default]
    Date,
    Amount,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalStatus {
    #[default]
    All,
    Completed,
    InProgress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalSortKey {
    #[default]
    Progress,
    Target,
    Saved,
    Name,
}

macro_rules! selector_strings {
    ($ty:ty, $kind:literal, { $($variant:path => $text:literal),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    other => Err(EngineError::InvalidOption {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($variant => f.write_str($text),)+
                }
            }
        }
    };
}

selector_strings!(TypeFilter, "transaction type", {
    TypeFilter::All => "all",
    TypeFilter::Income => "income",
    TypeFilter::Expense => "expense",
});

selector_strings!(TransactionSortKey, "transaction sort key", {
    TransactionSortKey::Date => "date",
    TransactionSortKey::Amount => "amount",
    TransactionSortKey::Title => "title",
});

selector_strings!(SortOrder, "sort order", {
    SortOrder::Asc => "asc",
    SortOrder::Desc => "desc",
});

selector_strings!(GoalStatus, "goal status", {
    GoalStatus::All => "all",
    GoalStatus::Completed => "completed",
    GoalStatus::InProgress => "in-progress",
});

selector_strings!(GoalSortKey, "goal sort key", {
    GoalSortKey::Progress => "progress",
    GoalSortKey::Target => "target",
    GoalSortKey::Saved => "saved",
    GoalSortKey::Name => "name",
});

fn matches_search(t: &Transaction, needle: &str) -> bool {
    t.title.to_lowercase().contains(needle) || t.category.to_lowercase().contains(needle)
}

pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    // A blank term matches everything; any other term is matched as typed.
    let needle = filter
        .search
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase);
    transactions
        .iter()
        .filter(|t| match filter.kind {
            TypeFilter::All => true,
            TypeFilter::Income => t.is_income(),
            TypeFilter::Expense => t.is_expense(),
        })
        .filter(|t| needle.as_deref().is_none_or(|n| matches_search(t, n)))
        .cloned()
        .collect()
}

pub fn sort_transactions(
    transactions: &[Transaction],
    key: TransactionSortKey,
    order: SortOrder,
) -> Vec<Transaction> {
    let base = |a: &Transaction, b: &Transaction| -> Ordering {
        match key {
            TransactionSortKey::Date => a.date.cmp(&b.date),
            TransactionSortKey::Amount => a.amount.abs().cmp(&b.amount.abs()),
            TransactionSortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    };
    let mut out = transactions.to_vec();
    match order {
        SortOrder::Asc => out.sort_by(|a, b| base(a, b)),
        SortOrder::Desc => out.sort_by(|a, b| base(b, a)),
    }
    out
}

/// The `limit` newest transactions, newest first.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut out = sort_transactions(transactions, TransactionSortKey::Date, SortOrder::Desc);
    out.truncate(limit);
    out
}

pub fn filter_goals(goals: &[Goal], status: GoalStatus) -> Vec<Goal> {
    goals
        .iter()
        .filter(|g| match status {
            GoalStatus::All => true,
            GoalStatus::Completed => is_completed(g),
            GoalStatus::InProgress => !is_completed(g),
        })
        .cloned()
        .collect()
}

fn progress_ratio(goal: &Goal) -> Decimal {
    if goal.target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    goal.saved.checked_div(goal.target).unwrap_or(Decimal::ZERO)
}

pub fn sort_goals(goals: &[Goal], key: GoalSortKey) -> Vec<Goal> {
    let mut out = goals.to_vec();
    match key {
        GoalSortKey::Progress => out.sort_by(|a, b| progress_ratio(b).cmp(&progress_ratio(a))),
        GoalSortKey::Target => out.sort_by(|a, b| b.target.cmp(&a.target)),
        GoalSortKey::Saved => out.sort_by(|a, b| b.saved.cmp(&a.saved)),
        GoalSortKey::Name => out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
    out
}
