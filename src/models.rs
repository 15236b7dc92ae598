// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::{format_bucket_label, saturating_sum};

/// A single ledger line. Positive amounts are income, negative amounts are
/// expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Totals derived from one transaction slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_balance: Decimal,
    pub cash_flow: Decimal,
    pub expenses: Decimal,
    pub total_income: Decimal,
    pub savings_rate: i64,
    pub budget_used_percent: i64,
}

impl Summary {
    /// Replace the cash flow with a figure the caller already scoped to a
    /// period.
    pub fn with_cash_flow(mut self, cash_flow: Decimal) -> Self {
        self.cash_flow = cash_flow;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Weekly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Monthly => f.write_str("monthly"),
            Granularity::Weekly => f.write_str("weekly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Bucket key: `YYYY-MM` for months, `<iso-year>-<week>` for weeks.
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
    /// Net of the bucket (`income - expense`).
    pub balance: Decimal,
}

impl SeriesPoint {
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Income and expense per time bucket, oldest bucket first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub granularity: Granularity,
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    /// Labels as shown on a chart axis (`Week 07` for weekly buckets).
    pub fn display_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| format_bucket_label(&p.label, self.granularity))
            .collect()
    }

    pub fn income(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.income).collect()
    }

    pub fn expenses(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.expense).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Absolute expense per category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown(pub BTreeMap<String, Decimal>);

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.0.get(category).copied()
    }

    pub fn total(&self) -> Decimal {
        saturating_sum(self.0.values().copied())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest spend first; equal amounts fall back to label order.
    pub fn sorted_desc(&self) -> Vec<(String, Decimal)> {
        let mut items: Vec<(String, Decimal)> =
            self.0.iter().map(|(k, v)| (k.clone(), *v)).collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));
        items
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Clamped to `0..=100`.
    pub percent: i64,
    pub remaining: Decimal,
}

/// Progress across every goal in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goals: usize,
    pub completed: usize,
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub percent: i64,
}
