// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{date, dec};
use moneyhub::snapshot::{self, RawTransaction, sanitize_transactions};
use moneyhub::utils::safe_number;
use rust_decimal::Decimal;
use serde_json::json;
use std::io::Write;
use tempfile::{Builder, tempdir};

#[test]
fn safe_number_coerces_garbage_to_zero() {
    assert_eq!(safe_number(&json!(12)), dec("12"));
    assert_eq!(safe_number(&json!(-85.5)), dec("-85.5"));
    assert_eq!(safe_number(&json!(" 42.10 ")), dec("42.10"));
    assert_eq!(safe_number(&json!("1e3")), dec("1000"));
    assert_eq!(safe_number(&json!(null)), Decimal::ZERO);
    assert_eq!(safe_number(&json!("abc")), Decimal::ZERO);
    assert_eq!(safe_number(&json!(true)), Decimal::ZERO);
    assert_eq!(safe_number(&json!([1, 2])), Decimal::ZERO);
}

#[test]
fn bad_records_degrade_instead_of_failing() {
    let raw: Vec<RawTransaction> = serde_json::from_value(json!([
        {"id": 1, "title": "Salary", "amount": 5000, "category": "Income", "date": "2024-02-24"},
        {"id": "2", "title": "Rent", "amount": "-1200.50", "category": "Bills", "date": "2024-02-20T09:30:00"},
        {"id": 3, "title": "Mystery", "amount": "n/a", "date": "2024-02-19"},
        {"title": "No amount", "category": "Misc", "date": "2024-02-18"},
        {"id": 5, "title": "No date", "amount": -10},
        {"id": 6, "title": "Bad date", "amount": -10, "date": "24/02/2024"}
    ]))
    .unwrap();
    let loaded = sanitize_transactions(raw);
    assert_eq!(loaded.skipped, 2);
    assert_eq!(loaded.items.len(), 4);

    let ids: Vec<&str> = loaded.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "#4"]);
    assert_eq!(loaded.items[1].amount, dec("-1200.50"));
    assert_eq!(loaded.items[1].date, date("2024-02-20"));
    assert!(loaded.items[2].amount.is_zero());
    assert!(loaded.items[3].amount.is_zero());
    assert_eq!(loaded.items[2].category, "");
}

#[test]
fn one_malformed_record_does_not_block_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");
    std::fs::write(
        &path,
        json!([
            {"id": 1, "title": "Salary", "amount": 5000, "category": "Income", "date": "2024-02-24"},
            {"id": 2, "title": 42, "amount": -10, "category": ["x"], "date": "2024-02-20"},
            {"id": 3, "title": "Twice", "amount": -5, "date": "2024-02-19",
             "timestamp": "2024-02-19T10:00:00"},
            "oops",
            {"title": "Late", "amount": -1, "date": 20240217},
            {"title": "Snack", "amount": -2, "date": "2024-02-16"}
        ])
        .to_string(),
    )
    .unwrap();

    let loaded = snapshot::load_transactions(&path).unwrap();
    let ids: Vec<&str> = loaded.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "#6"]);
    assert_eq!(loaded.skipped, 3);
    assert_eq!(loaded.items[0].title, "Salary");
    assert_eq!(loaded.items[1].title, "42");
    assert_eq!(loaded.items[1].category, "");
}

#[test]
fn unreadable_goal_records_are_dropped() {
    let dir = tempdir().unwrap();
    let path = snapshot::goals_path(dir.path());
    std::fs::write(
        &path,
        json!([
            {"id": 1, "name": 2025, "target": 1500, "saved": 400, "deadline": 7},
            42,
            {"id": 3, "name": "Vacation", "target": 2000, "saved": 300}
        ])
        .to_string(),
    )
    .unwrap();

    let goals = snapshot::load_goals(&path).unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].name, "2025");
    assert_eq!(goals[0].deadline, None);
    assert_eq!(goals[1].id, "3");
}

#[test]
fn loads_csv_transactions() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(
        file,
        "id,title,amount,category,date\n\
         t1, Groceries ,-85.00,Food,2024-02-18\n\
         t2,Salary,5000,Income,2024-02-24\n\
         t3,Broken,-1,Food,not-a-date"
    )
    .unwrap();
    file.flush().unwrap();

    let loaded = snapshot::load_transactions(file.path()).unwrap();
    assert_eq!(loaded.items.len(), 2);
    assert_eq!(loaded.skipped, 1);
    assert_eq!(loaded.items[0].title, "Groceries");
    assert_eq!(loaded.items[0].amount, dec("-85.00"));
    assert_eq!(loaded.items[1].date, date("2024-02-24"));
}

#[test]
fn loads_goals_with_api_spellings() {
    let dir = tempdir().unwrap();
    let path = snapshot::goals_path(dir.path());
    std::fs::write(
        &path,
        json!([
            {"id": 1, "name": "New Laptop", "target": 1500, "saved": 400},
            {"id": 2, "title": "Emergency Fund", "target_amount": "5000", "current_amount": null,
             "deadline": "2025-06-30"},
            {"id": 3, "name": "Vacation", "target": 2000, "saved": 300, "deadline": "soon"}
        ])
        .to_string(),
    )
    .unwrap();

    let goals = snapshot::load_goals(&path).unwrap();
    assert_eq!(goals.len(), 3);
    assert_eq!(goals[0].id, "1");
    assert_eq!(goals[1].name, "Emergency Fund");
    assert_eq!(goals[1].target, dec("5000"));
    assert!(goals[1].saved.is_zero());
    assert_eq!(goals[1].deadline, Some(date("2025-06-30")));
    assert_eq!(goals[2].deadline, None);
}

#[test]
fn transactions_path_prefers_json_then_csv() {
    let dir = tempdir().unwrap();
    assert!(snapshot::transactions_path(dir.path()).ends_with("transactions.json"));

    std::fs::write(dir.path().join("transactions.csv"), "id,title,amount,category,date\n").unwrap();
    assert!(snapshot::transactions_path(dir.path()).ends_with("transactions.csv"));

    std::fs::write(dir.path().join("transactions.json"), "[]").unwrap();
    assert!(snapshot::transactions_path(dir.path()).ends_with("transactions.json"));
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = tempdir().unwrap();
    let err = snapshot::load_transactions(&dir.path().join("transactions.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("transactions.json"));
}
