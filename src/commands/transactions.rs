// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::Session;
use crate::models::Transaction;
use crate::query::{
    SortOrder, TransactionFilter, TransactionSortKey, TypeFilter, filter_transactions,
    sort_transactions,
};
use crate::utils::{fmt_money, maybe_print_json, pretty_table, saturating_sum};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = session.transactions()?;
    let data = query_rows(&txs, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.title.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.kind.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Title", "Category", "Amount", "Type"], rows)
        );
        let totals = Totals::of(&txs);
        println!(
            "Income {}  Expenses {}  Net {}",
            totals.income, totals.expenses, totals.net
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub category: String,
    pub amount: String,
    pub kind: &'static str,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        let kind = if t.is_income() {
            "income"
        } else if t.is_expense() {
            "expense"
        } else {
            "-"
        };
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            title: t.title.clone(),
            category: t.category.clone(),
            amount: fmt_money(&t.amount),
            kind,
        }
    }
}

/// Totals over the whole snapshot, independent of the active filter.
struct Totals {
    income: String,
    expenses: String,
    net: String,
}

impl Totals {
    fn of(txs: &[Transaction]) -> Self {
        let income = saturating_sum(txs.iter().filter(|t| t.is_income()).map(|t| t.amount));
        let expenses = saturating_sum(
            txs.iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount.abs()),
        );
        Self {
            income: fmt_money(&income),
            expenses: fmt_money(&expenses),
            net: fmt_money(&income.saturating_sub(expenses)),
        }
    }
}

pub fn query_rows(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let kind: TypeFilter = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TypeFilter>())
        .transpose()?
        .unwrap_or_default();
    let search = sub.get_one::<String>("search").cloned();
    let key: TransactionSortKey = sub
        .get_one::<String>("sort")
        .map(|s| s.parse::<TransactionSortKey>())
        .transpose()?
        .unwrap_or_default();
    let order: SortOrder = sub
        .get_one::<String>("order")
        .map(|s| s.parse::<SortOrder>())
        .transpose()?
        .unwrap_or_default();

    let filtered = filter_transactions(txs, &TransactionFilter { kind, search });
    let mut sorted = sort_transactions(&filtered, key, order);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sorted.truncate(*limit);
    }
    Ok(sorted.iter().map(TransactionRow::from).collect())
}
