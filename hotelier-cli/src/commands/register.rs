//! Register command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use hotelier::gate::DatabaseGate;

/// Register a customer account and print its user id.
#[derive(Args)]
pub struct RegisterCommand {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Password of the new account
    #[arg(long, env = "HOTELIER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl RegisterCommand {
    /// Execute the register command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = DatabaseGate::new().register_customer(&mut db, &self.name, &self.password)?;
        println!("{id}");
        Ok(())
    }
}
