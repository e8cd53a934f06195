//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_plate, GlobalOptions};
use carpark::operations::{execute_cancel_reservation, CancelOptions};
use clap::Args;

/// Cancel a plate's reservations.
#[derive(Args)]
pub struct CancelCommand {
    /// License plate whose reservations are cancelled
    #[arg(value_name = "PLATE")]
    pub plate: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let outcome = execute_cancel_reservation(&mut db, &CancelOptions::new(plate))?;
        println!("{outcome}");

        Ok(())
    }
}
