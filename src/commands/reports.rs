// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::aggregate::{
    Budget, compute_category_breakdown, compute_monthly_series, compute_series_with_labels,
    compute_summary, compute_weekly_series, trailing_week_labels,
};
use crate::commands::Session;
use crate::config::Settings;
use crate::models::{CategoryBreakdown, Granularity, Summary, TimeSeries, Transaction};
use crate::query::recent_transactions;
use crate::utils::{fmt_money, maybe_print_json, month_key, parse_month, pretty_table};

fn in_month(transactions: &[Transaction], month: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| month_key(t.date) == month)
        .cloned()
        .collect()
}

pub fn build_summary(
    transactions: &[Transaction],
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<Summary> {
    let budget = match sub.get_one::<i64>("budget") {
        Some(p) => Budget::Fixed(*p),
        None => Budget::Policy(settings.budget_policy()),
    };
    let summary = compute_summary(transactions, &budget);
    match sub.get_one::<String>("month") {
        Some(m) => {
            let month = parse_month(m.trim())?;
            let scoped = compute_summary(&in_month(transactions, &month), &budget);
            Ok(summary.with_cash_flow(scoped.total_balance))
        }
        None => Ok(summary),
    }
}

pub fn build_series(
    transactions: &[Transaction],
    sub: &clap::ArgMatches,
) -> Result<TimeSeries> {
    let granularity = sub
        .get_one::<String>("granularity")
        .map(String::as_str)
        .unwrap_or("monthly");
    let series = match (granularity, sub.get_one::<usize>("trailing")) {
        ("weekly", Some(weeks)) => {
            let labels = trailing_week_labels(Utc::now().date_naive(), *weeks);
            compute_series_with_labels(transactions, Granularity::Weekly, &labels)
        }
        ("weekly", None) => compute_weekly_series(transactions),
        _ => compute_monthly_series(transactions),
    };
    Ok(series)
}

pub fn build_categories(
    transactions: &[Transaction],
    sub: &clap::ArgMatches,
) -> Result<CategoryBreakdown> {
    match sub.get_one::<String>("month") {
        Some(m) => {
            let month = parse_month(m.trim())?;
            Ok(compute_category_breakdown(&in_month(transactions, &month)))
        }
        None => Ok(compute_category_breakdown(transactions)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: Summary,
    pub monthly: TimeSeries,
    pub weekly: TimeSeries,
    pub categories: CategoryBreakdown,
    pub recent: Vec<Transaction>,
}

pub fn build_dashboard(
    transactions: &[Transaction],
    settings: &Settings,
    today: chrono::NaiveDate,
) -> Dashboard {
    let labels = trailing_week_labels(today, settings.weekly_window);
    Dashboard {
        summary: compute_summary(transactions, &Budget::Policy(settings.budget_policy())),
        monthly: compute_monthly_series(transactions),
        weekly: compute_series_with_labels(transactions, Granularity::Weekly, &labels),
        categories: compute_category_breakdown(transactions),
        recent: recent_transactions(transactions, settings.recent_limit),
    }
}

fn summary_rows(s: &Summary) -> Vec<Vec<String>> {
    vec![
        vec!["Total balance".into(), fmt_money(&s.total_balance)],
        vec!["Cash flow".into(), fmt_money(&s.cash_flow)],
        vec!["Income".into(), fmt_money(&s.total_income)],
        vec!["Expenses".into(), fmt_money(&s.expenses)],
        vec!["Savings rate".into(), format!("{}%", s.savings_rate)],
        vec!["Budget usage".into(), format!("{}%", s.budget_used_percent)],
    ]
}

fn series_rows(series: &TimeSeries) -> Vec<Vec<String>> {
    series
        .display_labels()
        .into_iter()
        .zip(&series.points)
        .map(|(label, p)| {
            vec![
                label,
                fmt_money(&p.income),
                fmt_money(&p.expense),
                fmt_money(&p.balance),
            ]
        })
        .collect()
}

fn category_rows(breakdown: &CategoryBreakdown) -> Vec<Vec<String>> {
    breakdown
        .sorted_desc()
        .into_iter()
        .map(|(cat, amt)| vec![cat, fmt_money(&amt)])
        .collect()
}

pub fn summary(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let txs = session.transactions()?;
    let s = build_summary(&txs, &session.settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        println!("{}", pretty_table(&["Metric", "Value"], summary_rows(&s)));
    }
    Ok(())
}

pub fn series(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let txs = session.transactions()?;
    let series = build_series(&txs, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        let first = match series.granularity {
            Granularity::Monthly => "Month",
            Granularity::Weekly => "Week",
        };
        println!(
            "{}",
            pretty_table(&[first, "Income", "Expense", "Net"], series_rows(&series))
        );
    }
    Ok(())
}

pub fn categories(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let txs = session.transactions()?;
    let breakdown = build_categories(&txs, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &breakdown)? {
        println!(
            "{}",
            pretty_table(&["Category", "Spent"], category_rows(&breakdown))
        );
    }
    Ok(())
}

pub fn dashboard(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let txs = session.transactions()?;
    let d = build_dashboard(&txs, &session.settings, Utc::now().date_naive());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &d)? {
        return Ok(());
    }
    println!("{}", pretty_table(&["Metric", "Value"], summary_rows(&d.summary)));
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense", "Net"], series_rows(&d.monthly))
    );
    println!(
        "{}",
        pretty_table(&["Week", "Income", "Expense", "Net"], series_rows(&d.weekly))
    );
    println!(
        "{}",
        pretty_table(&["Category", "Spent"], category_rows(&d.categories))
    );
    let recent: Vec<Vec<String>> = d
        .recent
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.title.clone(),
                t.category.clone(),
                fmt_money(&t.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Title", "Category", "Amount"], recent)
    );
    Ok(())
}
