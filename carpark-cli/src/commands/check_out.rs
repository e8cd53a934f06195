//! Check-out command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_plate, GlobalOptions};
use carpark::operations::{execute_check_out, CheckOutOptions};
use clap::Args;

/// Record a vehicle leaving the lot.
#[derive(Args)]
pub struct CheckOutCommand {
    /// License plate of the departing vehicle
    #[arg(value_name = "PLATE")]
    pub plate: String,
}

impl CheckOutCommand {
    /// Execute the check-out command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let outcome = execute_check_out(&mut db, &CheckOutOptions::new(plate))?;
        println!("{outcome}");

        Ok(())
    }
}
