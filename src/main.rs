// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use moneyhub::{cli, commands, config, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_count("verbose"));

    let settings = config::load(matches.get_one::<String>("config").map(Path::new))?;
    let session = commands::Session::from_matches(settings, &matches)?;

    match matches.subcommand() {
        Some(("summary", sub)) => commands::reports::summary(&session, sub)?,
        Some(("series", sub)) => commands::reports::series(&session, sub)?,
        Some(("categories", sub)) => commands::reports::categories(&session, sub)?,
        Some(("dashboard", sub)) => commands::reports::dashboard(&session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&session, sub)?,
        Some(("goals", sub)) => commands::goals::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
