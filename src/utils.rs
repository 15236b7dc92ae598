// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::Granularity;

/// Coerce a loosely-typed payload field into an amount.
///
/// Numbers and numeric strings are kept; anything else (missing, `null`,
/// booleans, garbage text, values outside the decimal range) becomes zero.
pub fn safe_number(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from(u)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(|f| Decimal::try_from(f).ok())
                    .unwrap_or(Decimal::ZERO)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(s))
                .unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

/// `round(numerator / denominator * 100)`, or `0` when the denominator is not
/// positive. Halves round up towards positive infinity, so `-12.5` gives `-12`.
pub fn round_percent(numerator: Decimal, denominator: Decimal) -> i64 {
    if denominator <= Decimal::ZERO {
        return 0;
    }
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.checked_add(Decimal::new(5, 1)))
        .map(|pct| pct.floor())
        .and_then(|pct| pct.to_i64())
        .unwrap_or(0)
}

/// Sum of amounts that stops at the decimal bounds instead of overflowing.
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, d| acc.saturating_add(d))
}

/// Render a bucket key for display. Weekly keys `<year>-<week>` become
/// `Week <week>`; a key without the separator is returned as is.
pub fn format_bucket_label(raw: &str, granularity: Granularity) -> String {
    match granularity {
        Granularity::Monthly => raw.to_string(),
        Granularity::Weekly => match raw.split_once('-') {
            Some((_, week)) => format!("Week {}", week),
            None => raw.to_string(),
        },
    }
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// ISO week bucket key, e.g. `2024-08`. The year is the ISO week-year, which
/// differs from the calendar year around new year.
pub fn iso_week_key(date: NaiveDate) -> String {
    let w = date.iso_week();
    format!("{}-{:02}", w.year(), w.week())
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
