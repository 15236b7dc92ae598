// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors returned by the analytics engine.
//!
//! Only validation failures are errors. Malformed numbers in a snapshot are
//! coerced to zero while loading and never reach this type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A goal whose target is zero or negative.
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
    /// A manual edit outside `0..=target`.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// A filter/sort selector that has no meaning.
    #[error("Unknown {kind} '{value}'")]
    InvalidOption { kind: &'static str, value: String },
}

pub type ResultEngine<T> = Result<T, EngineError>;
