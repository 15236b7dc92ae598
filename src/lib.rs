// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod goals;
pub mod logging;
pub mod models;
pub mod query;
pub mod snapshot;
pub mod utils;

pub use error::{EngineError, ResultEngine};
