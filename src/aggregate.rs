// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard aggregates: summary totals, monthly/weekly series and the
//! expense breakdown by category.
//!
//! Every function sums exactly the slice it is given. Scoping a slice to a
//! period is up to the caller.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    CategoryBreakdown, Granularity, SeriesPoint, Summary, TimeSeries, Transaction,
};
use crate::utils::{iso_week_key, month_key, round_percent};

/// Label used for expenses recorded without a category.
pub const OTHER_CATEGORY: &str = "Other";

/// How the budget usage figure is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Already computed by the caller.
    Fixed(i64),
    Policy(BudgetPolicy),
}

impl Default for Budget {
    fn default() -> Self {
        Budget::Policy(BudgetPolicy::default())
    }
}

/// Budget usage = expenses as a share of `share_percent` of income, capped at
/// `cap_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPolicy {
    pub share_percent: u32,
    pub cap_percent: u32,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            share_percent: 70,
            cap_percent: 75,
        }
    }
}

pub fn budget_usage(expenses: Decimal, income: Decimal, policy: &BudgetPolicy) -> i64 {
    if income <= Decimal::ZERO {
        return 0;
    }
    let budget =
        income.saturating_mul(Decimal::from(policy.share_percent)) / Decimal::ONE_HUNDRED;
    round_percent(expenses, budget).min(i64::from(policy.cap_percent))
}

pub fn compute_summary(transactions: &[Transaction], budget: &Budget) -> Summary {
    let mut total_balance = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        total_balance = total_balance.saturating_add(t.amount);
        if t.is_expense() {
            expenses = expenses.saturating_add(t.amount.abs());
        }
    }
    let total_income = total_balance.saturating_add(expenses);
    let savings_rate = if total_income > Decimal::ZERO {
        round_percent(total_balance, total_income)
    } else {
        0
    };
    let budget_used_percent = match budget {
        Budget::Fixed(p) => *p,
        Budget::Policy(policy) => budget_usage(expenses, total_income, policy),
    };
    tracing::debug!(
        transactions = transactions.len(),
        %total_balance,
        %expenses,
        "computed summary"
    );
    Summary {
        total_balance,
        cash_flow: total_balance,
        expenses,
        total_income,
        savings_rate,
        budget_used_percent,
    }
}

fn add_to_point(point: &mut SeriesPoint, amount: Decimal) {
    if amount > Decimal::ZERO {
        point.income = point.income.saturating_add(amount);
    } else if amount < Decimal::ZERO {
        point.expense = point.expense.saturating_add(amount.abs());
    }
    point.balance = point.balance.saturating_add(amount);
}

fn bucket_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Monthly => month_key(date),
        Granularity::Weekly => iso_week_key(date),
    }
}

fn compute_series(transactions: &[Transaction], granularity: Granularity) -> TimeSeries {
    // Both key formats are zero-padded `<year>-<nn>`, so lexical order of the
    // keys is chronological order of the buckets.
    let mut buckets: BTreeMap<String, SeriesPoint> = BTreeMap::new();
    for t in transactions {
        let key = bucket_key(t.date, granularity);
        let point = buckets
            .entry(key.clone())
            .or_insert_with(|| SeriesPoint::empty(key));
        add_to_point(point, t.amount);
    }
    tracing::debug!(%granularity, buckets = buckets.len(), "computed series");
    TimeSeries {
        granularity,
        points: buckets.into_values().collect(),
    }
}

pub fn compute_monthly_series(transactions: &[Transaction]) -> TimeSeries {
    compute_series(transactions, Granularity::Monthly)
}

pub fn compute_weekly_series(transactions: &[Transaction]) -> TimeSeries {
    compute_series(transactions, Granularity::Weekly)
}

/// Series over a caller-chosen set of buckets, in the caller's order.
///
/// Buckets with no transactions report zero. Transactions falling outside
/// every listed bucket are ignored.
pub fn compute_series_with_labels(
    transactions: &[Transaction],
    granularity: Granularity,
    labels: &[String],
) -> TimeSeries {
    let mut points: Vec<SeriesPoint> = labels
        .iter()
        .map(|l| SeriesPoint::empty(l.as_str()))
        .collect();
    let index: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();
    for t in transactions {
        let key = bucket_key(t.date, granularity);
        if let Some(&i) = index.get(key.as_str()) {
            add_to_point(&mut points[i], t.amount);
        }
    }
    TimeSeries {
        granularity,
        points,
    }
}

/// Keys of the `weeks` ISO weeks ending with the week containing `today`,
/// oldest first. The window stops early at the earliest representable date.
pub fn trailing_week_labels(today: NaiveDate, weeks: usize) -> Vec<String> {
    let mut labels: Vec<String> = (0..weeks as u64)
        .map_while(|back| {
            let days = back.checked_mul(7)?;
            today.checked_sub_days(Days::new(days))
        })
        .map(iso_week_key)
        .collect();
    labels.reverse();
    labels
}

pub fn compute_category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let label = match t.category.trim() {
            "" => OTHER_CATEGORY.to_string(),
            c => c.to_string(),
        };
        let total = agg.entry(label).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount.abs());
    }
    CategoryBreakdown(agg)
}
