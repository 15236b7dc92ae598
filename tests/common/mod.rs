// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use moneyhub::models::{Goal, Transaction};
use rust_decimal::Decimal;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn tx(id: &str, title: &str, amount: &str, category: &str, day: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        amount: dec(amount),
        category: category.to_string(),
        date: date(day),
    }
}

pub fn goal(id: &str, name: &str, target: &str, saved: &str) -> Goal {
    Goal {
        id: id.to_string(),
        name: name.to_string(),
        target: dec(target),
        saved: dec(saved),
        deadline: None,
    }
}

/// Demo ledger: February 2024 plus two uncategorized January entries.
pub fn ledger() -> Vec<Transaction> {
    vec![
        tx("1", "Salary", "5000", "Income", "2024-02-24"),
        tx("2", "Rent", "-1200", "Bills", "2024-02-20"),
        tx("3", "Groceries", "-85", "Food", "2024-02-18"),
        tx("4", "Freelance Work", "800", "Income", "2024-02-15"),
        tx("5", "Utilities", "-150", "Bills", "2024-02-10"),
        tx("6", "Dinner Out", "-45", "Entertainment", "2024-02-05"),
        tx("7", "Gift", "200", "", "2024-01-12"),
        tx("8", "Coffee", "-4.50", "  ", "2024-01-30"),
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        goal("1", "New Laptop", "1500", "400"),
        goal("2", "Emergency Fund", "5000", "1200"),
        goal("3", "Vacation", "2000", "300"),
    ]
}
