//! Reserve command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_plate, GlobalOptions};
use carpark::operations::{execute_reserve, ReserveOptions};
use carpark::SlotNumber;
use clap::Args;

/// Reserve a parking slot for a plate.
#[derive(Args)]
pub struct ReserveCommand {
    /// License plate the reservation is for
    #[arg(value_name = "PLATE")]
    pub plate: String,

    /// Reservation window start, "YYYY-MM-DD HH:MM:SS"
    #[arg(long, value_name = "TIME")]
    pub start: String,

    /// Reservation window end, "YYYY-MM-DD HH:MM:SS"
    #[arg(long, value_name = "TIME")]
    pub end: String,

    /// Slot number to reserve
    #[arg(long, value_name = "SLOT")]
    pub slot: u32,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let slot = SlotNumber::try_from(i64::from(self.slot))
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let options = ReserveOptions::new(plate, self.start, self.end, slot);
        let outcome = execute_reserve(&mut db, &options)?;
        println!("{outcome}");

        Ok(())
    }
}
