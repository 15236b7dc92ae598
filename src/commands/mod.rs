// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod goals;
pub mod reports;
pub mod transactions;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Settings;
use crate::models::{Goal, Transaction};
use crate::snapshot;

/// Where a command reads its snapshot from, and the settings it runs with.
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    pub transactions_path: PathBuf,
    pub goals_path: PathBuf,
}

impl Session {
    /// Resolve snapshot paths from the global flags, falling back to the
    /// configured data directory.
    pub fn from_matches(mut settings: Settings, m: &clap::ArgMatches) -> Result<Self> {
        if let Some(dir) = m.get_one::<String>("data-dir") {
            settings.data_dir = Some(PathBuf::from(dir.trim()));
        }
        let dir = settings.resolve_data_dir()?;
        let transactions_path = match m.get_one::<String>("transactions-file") {
            Some(p) => PathBuf::from(p.trim()),
            None => snapshot::transactions_path(&dir),
        };
        let goals_path = match m.get_one::<String>("goals-file") {
            Some(p) => PathBuf::from(p.trim()),
            None => snapshot::goals_path(&dir),
        };
        Ok(Self {
            settings,
            transactions_path,
            goals_path,
        })
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        let loaded = snapshot::load_transactions(&self.transactions_path)?;
        if loaded.skipped > 0 {
            eprintln!(
                "Skipped {} malformed transaction(s) in {}",
                loaded.skipped,
                self.transactions_path.display()
            );
        }
        Ok(loaded.items)
    }

    pub fn goals(&self) -> Result<Vec<Goal>> {
        snapshot::load_goals(&self.goals_path)
    }
}
