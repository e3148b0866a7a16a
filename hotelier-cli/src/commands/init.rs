//! Init command implementation.
//!
//! This module implements the `init` command, which creates the data
//! directory and the database, and optionally a configuration file.

use crate::error::CliError;
use crate::utils::{data_dir, database_config, load_configuration, shorten_path, GlobalOptions};
use clap::Args;
use hotelier::config::CONFIG_FILE_NAME;
use hotelier::Database;
use std::fs;

/// Configuration written by `init --with-config`.
const DEFAULT_CONFIG: &str = "\
# hotelier configuration
# busy_timeout_seconds: 5
# search_radius: 30.0
# recent_limit: 5
# recent_updates_scope: own-hotels
";

/// Create the data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Also write a commented configuration file
    #[arg(long)]
    pub with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = data_dir(global)?;
        let config = load_configuration(global)?;
        let db_config = database_config(global, &config)?;
        let existed = db_config.path.exists();

        Database::open(db_config)?;

        if !global.quiet {
            println!("Initialized hotelier in: {}", shorten_path(&dir));
            if existed {
                println!("  - Database already exists");
            } else {
                println!("  - Created database");
            }
        }

        if self.with_config {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                if !global.quiet {
                    println!("  - Configuration file already exists (not overwritten)");
                }
            } else {
                fs::write(&config_path, DEFAULT_CONFIG)?;
                if !global.quiet {
                    println!("  - Created default configuration file");
                }
            }
        }

        Ok(())
    }
}
