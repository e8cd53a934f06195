//! Slots command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use carpark::Database;
use clap::Args;
use std::io::Write;

/// Show the slot map.
#[derive(Args)]
pub struct SlotsCommand {
    /// Show only available slots
    #[arg(long)]
    pub available: bool,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SlotsCommand {
    /// Execute the slots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let mut slots = Database::list_slots(db.connection()).map_err(CliError::from)?;
        if self.available {
            slots.retain(|s| s.status == carpark::SlotStatus::Available);
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            serde_json::to_writer_pretty(&mut handle, &slots)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            writeln!(handle)?;
        } else {
            writeln!(handle, "SLOT\tSTATUS")?;
            for slot in &slots {
                writeln!(handle, "{}\t{}", slot.number, slot.status)?;
            }
        }

        Ok(())
    }
}
