// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Loading exported transaction and goal collections from disk.
//!
//! Payloads come from the web API and are loosely typed: amounts may be
//! numbers, strings or missing, ids may be numbers or strings. This module is
//! the only place those shapes are tolerated; everything past it works on
//! [`Transaction`] and [`Goal`].

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::models::{Goal, Transaction};
use crate::utils::{parse_date, safe_number};

pub const TRANSACTIONS_STEM: &str = "transactions";
pub const GOALS_FILE: &str = "goals.json";

/// Records that survived sanitization, plus how many were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub id: Value,
    #[serde(alias = "description")]
    pub title: Value,
    pub amount: Value,
    pub category: Value,
    #[serde(alias = "timestamp")]
    pub date: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawGoal {
    pub id: Value,
    #[serde(alias = "title")]
    pub name: Value,
    #[serde(alias = "target_amount")]
    pub target: Value,
    #[serde(alias = "current_amount")]
    pub saved: Value,
    pub deadline: Value,
}

fn id_text(id: &Value, position: usize) -> String {
    match id {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => format!("#{}", position + 1),
    }
}

/// Free text from a loosely-typed field. Numbers and booleans are rendered,
/// anything else is empty.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Accepts `YYYY-MM-DD` as well as ISO timestamps like `2024-02-24T00:00:00`.
fn date_part(raw: &str) -> &str {
    let raw = raw.trim();
    raw.split_once('T').map(|(d, _)| d).unwrap_or(raw)
}

impl RawTransaction {
    pub fn sanitize(self, position: usize) -> Result<Transaction> {
        let id = id_text(&self.id, position);
        let date_raw = self
            .date
            .as_str()
            .ok_or_else(|| anyhow!("transaction {} has no date", id))?;
        let date = parse_date(date_part(date_raw))
            .with_context(|| format!("transaction {}", id))?;
        if !matches!(self.amount, Value::Number(_) | Value::String(_)) {
            tracing::warn!(id = %id, "amount missing or not numeric, counting as 0");
        }
        Ok(Transaction {
            id,
            title: text(&self.title),
            amount: safe_number(&self.amount),
            category: text(&self.category),
            date,
        })
    }
}

impl RawGoal {
    pub fn sanitize(self, position: usize) -> Goal {
        let id = id_text(&self.id, position);
        let deadline = self
            .deadline
            .as_str()
            .filter(|d| !d.trim().is_empty())
            .and_then(|d| match parse_date(date_part(d)) {
                Ok(date) => Some(date),
                Err(err) => {
                    tracing::warn!(id = %id, "dropping deadline: {:#}", err);
                    None
                }
            });
        Goal {
            name: text(&self.name),
            target: safe_number(&self.target),
            saved: safe_number(&self.saved),
            deadline,
            id,
        }
    }
}

pub fn sanitize_transactions(raw: Vec<RawTransaction>) -> Loaded<Transaction> {
    sanitize_records(raw.into_iter().map(Some).collect())
}

/// `None` entries are records that could not be decoded; they keep their
/// position so generated ids match the file, and count as skipped.
fn sanitize_records(raw: Vec<Option<RawTransaction>>) -> Loaded<Transaction> {
    let mut items = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    for (i, r) in raw.into_iter().enumerate() {
        match r.map(|r| r.sanitize(i)) {
            Some(Ok(t)) => items.push(t),
            Some(Err(err)) => {
                tracing::warn!("skipping transaction: {:#}", err);
                skipped += 1;
            }
            None => skipped += 1,
        }
    }
    Loaded { items, skipped }
}

/// Read a JSON array, decoding each element on its own. An element with the
/// wrong shape becomes `None` so the rest of the file still loads; only a
/// file that is not an array at all is an error.
fn read_records<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<Option<T>>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Read {}", path.display()))?;
    let values: Vec<Value> = serde_json::from_str(&text)
        .with_context(|| format!("Parse {} in {}", what, path.display()))?;
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(i, v)| match serde_json::from_value(v) {
            Ok(r) => Some(r),
            Err(err) => {
                tracing::warn!(record = i + 1, "skipping unreadable {} record: {}", what, err);
                None
            }
        })
        .collect())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Read transactions from a JSON array or a CSV file with the header
/// `id,title,amount,category,date`.
pub fn load_transactions(path: &Path) -> Result<Loaded<Transaction>> {
    let raw: Vec<Option<RawTransaction>> = if is_csv(path) {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Open CSV {}", path.display()))?;
        let mut rows = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            let field = |i: usize| match rec.get(i) {
                Some(s) if !s.is_empty() => Value::String(s.to_string()),
                _ => Value::Null,
            };
            rows.push(Some(RawTransaction {
                id: field(0),
                title: field(1),
                amount: field(2),
                category: field(3),
                date: field(4),
            }));
        }
        rows
    } else {
        read_records(path, "transactions")?
    };
    let loaded = sanitize_records(raw);
    tracing::info!(
        path = %path.display(),
        loaded = loaded.items.len(),
        skipped = loaded.skipped,
        "loaded transactions"
    );
    Ok(loaded)
}

pub fn load_goals(path: &Path) -> Result<Vec<Goal>> {
    let raw: Vec<Option<RawGoal>> = read_records(path, "goals")?;
    let skipped = raw.iter().filter(|g| g.is_none()).count();
    let goals: Vec<Goal> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, g)| g.map(|g| g.sanitize(i)))
        .collect();
    tracing::info!(path = %path.display(), loaded = goals.len(), skipped, "loaded goals");
    Ok(goals)
}

/// `transactions.json` in `dir`, or `transactions.csv` when only that exists.
pub fn transactions_path(dir: &Path) -> PathBuf {
    let json = dir.join(format!("{}.json", TRANSACTIONS_STEM));
    let csv = dir.join(format!("{}.csv", TRANSACTIONS_STEM));
    if !json.exists() && csv.exists() { csv } else { json }
}

pub fn goals_path(dir: &Path) -> PathBuf {
    dir.join(GOALS_FILE)
}
