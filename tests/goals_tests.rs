// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{dec, goal, goals};
use moneyhub::EngineError;
use moneyhub::goals::{apply_increment, apply_manual_edit, compute_progress, is_completed, overview};
use rust_decimal::Decimal;

#[test]
fn progress_rounds_to_whole_percent() {
    let p = compute_progress(&goal("1", "Laptop", "1500", "400")).unwrap();
    assert_eq!(p.percent, 27);
    assert_eq!(p.remaining, dec("1100"));
}

#[test]
fn progress_clamps_overshoot() {
    let p = compute_progress(&goal("1", "Bike", "1000", "1200")).unwrap();
    assert_eq!(p.percent, 100);
    assert_eq!(p.remaining, Decimal::ZERO);
}

#[test]
fn progress_rejects_non_positive_target() {
    for target in ["0", "-10"] {
        let err = compute_progress(&goal("1", "Broken", target, "5")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidGoal(_)));
    }
}

#[test]
fn increment_caps_at_target() {
    let g = goal("1", "Trip", "1000", "950");
    let bumped = apply_increment(&g, dec("0.1"));
    assert_eq!(bumped.saved, dec("1000"));
    assert_eq!(g.saved, dec("950"));
}

#[test]
fn increment_adds_fraction_of_target() {
    let bumped = apply_increment(&goal("1", "Trip", "1000", "100"), dec("0.1"));
    assert_eq!(bumped.saved, dec("200"));
    assert_eq!(bumped.target, dec("1000"));
    assert_eq!(bumped.name, "Trip");
}

#[test]
fn increment_too_large_to_represent_fills_goal() {
    let g = goal("1", "Island", "10000000000000000000000", "5");
    assert_eq!(apply_increment(&g, dec("40000000")).saved, g.target);
}

#[test]
fn overview_saturates_on_huge_totals() {
    let big = "50000000000000000000000000000";
    let all = vec![goal("1", "A", big, big), goal("2", "B", big, "1")];
    let o = overview(&all);
    assert_eq!(o.total_target, Decimal::MAX);
    assert_eq!(o.goals, 2);
}

#[test]
fn increment_never_lowers_saved() {
    let over = goal("1", "Car", "1000", "1200");
    assert_eq!(apply_increment(&over, dec("0.1")).saved, dec("1200"));

    let g = goal("2", "Car", "1000", "300");
    assert_eq!(apply_increment(&g, dec("-0.5")).saved, dec("300"));
}

#[test]
fn manual_edit_out_of_range_fails_without_change() {
    let g = goal("1", "Phone", "500", "100");
    let err = apply_manual_edit(&g, dec("600")).unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert_eq!(g.saved, dec("100"));

    assert!(apply_manual_edit(&g, dec("-0.01")).is_err());
}

#[test]
fn manual_edit_accepts_bounds() {
    let g = goal("1", "Phone", "500", "100");
    assert_eq!(apply_manual_edit(&g, dec("500")).unwrap().saved, dec("500"));
    assert_eq!(apply_manual_edit(&g, Decimal::ZERO).unwrap().saved, Decimal::ZERO);
}

#[test]
fn completion_is_saved_at_least_target() {
    assert!(is_completed(&goal("1", "A", "100", "100")));
    assert!(is_completed(&goal("2", "B", "100", "150")));
    assert!(!is_completed(&goal("3", "C", "100", "99.99")));
}

#[test]
fn overview_totals_all_goals() {
    let o = overview(&goals());
    assert_eq!(o.goals, 3);
    assert_eq!(o.completed, 0);
    assert_eq!(o.total_saved, dec("1900"));
    assert_eq!(o.total_target, dec("8500"));
    assert_eq!(o.percent, 22);
}

#[test]
fn overview_of_nothing_is_zero() {
    let o = overview(&[]);
    assert_eq!(o.goals, 0);
    assert_eq!(o.percent, 0);
}
