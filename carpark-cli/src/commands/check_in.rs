//! Check-in command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_plate, GlobalOptions};
use carpark::operations::{execute_check_in, CheckInOptions};
use clap::Args;

/// Record a vehicle entering the lot.
#[derive(Args)]
pub struct CheckInCommand {
    /// License plate of the arriving vehicle
    #[arg(value_name = "PLATE")]
    pub plate: String,

    /// Vehicle type label, e.g. "Toyota Corolla"
    #[arg(long, value_name = "TYPE")]
    pub vehicle_type: String,

    /// Owner gender, recorded verbatim
    #[arg(long, value_name = "GENDER")]
    pub owner_gender: Option<String>,

    /// Passenger indicator, recorded verbatim
    #[arg(long, value_name = "PASSENGERS")]
    pub passengers: Option<String>,
}

impl CheckInCommand {
    /// Execute the check-in command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let mut options = CheckInOptions::new(plate, self.vehicle_type);
        if let Some(gender) = self.owner_gender {
            options = options.with_owner_gender(gender);
        }
        if let Some(passengers) = self.passengers {
            options = options.with_passengers(passengers);
        }

        let outcome = execute_check_in(&mut db, &options)?;
        println!("{outcome}");

        Ok(())
    }
}
