//! Status command implementation.
//!
//! One-screen occupancy summary: how many vehicles are inside, how many
//! have left, and how the slots are split between reserved and free.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use carpark::{Database, SlotStatus};
use clap::Args;
use std::io::Write;

/// Show lot occupancy counts.
#[derive(Args)]
pub struct StatusCommand {
    /// Emit JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let checked_in = Database::list_active_movements(db.connection())
            .map_err(CliError::from)?
            .len();
        let checked_out = Database::list_completed_movements(db.connection())
            .map_err(CliError::from)?
            .len();
        let reservations = Database::list_all_reservations(db.connection())
            .map_err(CliError::from)?;
        let active_reservations = reservations.iter().filter(|r| r.is_active()).count();
        let slots = Database::list_slots(db.connection()).map_err(CliError::from)?;
        let available_slots = slots
            .iter()
            .filter(|s| s.status == SlotStatus::Available)
            .count();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.json {
            let summary = serde_json::json!({
                "checked_in": checked_in,
                "checked_out": checked_out,
                "active_reservations": active_reservations,
                "available_slots": available_slots,
                "total_slots": slots.len(),
            });
            serde_json::to_writer_pretty(&mut handle, &summary)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            writeln!(handle)?;
        } else {
            writeln!(handle, "Vehicles inside:      {checked_in}")?;
            writeln!(handle, "Vehicles departed:    {checked_out}")?;
            writeln!(handle, "Active reservations:  {active_reservations}")?;
            writeln!(
                handle,
                "Available slots:      {available_slots}/{}",
                slots.len()
            )?;
        }

        Ok(())
    }
}
