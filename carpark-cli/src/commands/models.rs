//! Models command implementation.
//!
//! Shows the brand/model reference list seeded at initialization, which
//! backs the vehicle type field of `check-in`.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use carpark::Database;
use clap::Args;
use std::io::Write;

/// Show the vehicle model reference list.
#[derive(Args)]
pub struct ModelsCommand {
    /// Show only models of this brand
    #[arg(long, value_name = "BRAND")]
    pub brand: Option<String>,

    /// Show only the distinct brand names
    #[arg(long, conflicts_with = "brand")]
    pub brands_only: bool,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ModelsCommand {
    /// Execute the models command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if self.brands_only {
            let brands = Database::list_brands(db.connection()).map_err(CliError::from)?;
            if self.json {
                serde_json::to_writer_pretty(&mut handle, &brands)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                writeln!(handle)?;
            } else {
                for brand in &brands {
                    writeln!(handle, "{brand}")?;
                }
            }
            return Ok(());
        }

        let mut models = Database::list_vehicle_models(db.connection()).map_err(CliError::from)?;
        if let Some(ref brand) = self.brand {
            models.retain(|m| m.brand == *brand);
        }

        if self.json {
            serde_json::to_writer_pretty(&mut handle, &models)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            writeln!(handle)?;
        } else {
            writeln!(handle, "BRAND\tMODEL")?;
            for model in &models {
                writeln!(handle, "{}\t{}", model.brand, model.model)?;
            }
        }

        Ok(())
    }
}
