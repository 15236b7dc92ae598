// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Settings, layered as: built-in defaults, `moneyhub.toml`, then
//! `MONEYHUB_*` environment variables. Command line flags override all of
//! them at the call site.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::aggregate::BudgetPolicy;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Moneyhub", "moneyhub"));

pub const CONFIG_FILE: &str = "moneyhub.toml";
pub const ENV_PREFIX: &str = "MONEYHUB";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `transactions.json` (or `.csv`) and `goals.json`.
    pub data_dir: Option<PathBuf>,
    /// Share of income treated as the spending budget, in percent.
    pub budget_share: u32,
    /// Upper bound reported for budget usage, in percent.
    pub budget_cap: u32,
    /// Number of ISO weeks in the trailing weekly view.
    pub weekly_window: usize,
    pub recent_limit: usize,
    /// Step of the "add N%" goal action, in percent of the target.
    pub increment_percent: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let policy = BudgetPolicy::default();
        Self {
            data_dir: None,
            budget_share: policy.share_percent,
            budget_cap: policy.cap_percent,
            weekly_window: 8,
            recent_limit: 5,
            increment_percent: 10,
        }
    }
}

impl Settings {
    pub fn budget_policy(&self) -> BudgetPolicy {
        BudgetPolicy {
            share_percent: self.budget_share,
            cap_percent: self.budget_cap,
        }
    }

    pub fn increment_fraction(&self) -> Decimal {
        Decimal::from(self.increment_percent) / Decimal::ONE_HUNDRED
    }

    /// Configured data directory, or the platform data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")
}

pub fn default_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Load settings. An explicit `path` must exist; the default config file is
/// optional.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut builder = config::Config::builder();
    builder = match path {
        Some(p) => builder.add_source(config::File::from(p).required(true)),
        None => match default_config_path() {
            Ok(p) => builder.add_source(config::File::from(p).required(false)),
            Err(err) => {
                tracing::debug!("no default config location: {:#}", err);
                builder
            }
        },
    };
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let settings: Settings = builder
        .build()
        .context("Read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;
    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}
