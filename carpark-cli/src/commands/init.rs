//! Init command implementation.
//!
//! Creates and seeds the database explicitly. Every other command will
//! auto-initialize on first use unless `--disable-autoinit` is set, so
//! this exists for setups that provision the data directory ahead of
//! time (or with a non-default slot count).

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_database_path, GlobalOptions};
use carpark::Database;
use clap::Args;

/// Initialize the database explicitly.
#[derive(Args)]
pub struct InitCommand {
    /// Number of parking slots to provision (only honored on first
    /// initialization)
    #[arg(long, value_name = "COUNT")]
    pub slot_count: Option<u32>,

    /// Delete any existing database and start fresh
    #[arg(long)]
    pub overwrite: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut config = load_configuration(global)?;
        if let Some(count) = self.slot_count {
            config.slot_count = Some(count);
        }

        if self.overwrite {
            let db_path = resolve_database_path(global, &config)?;
            for suffix in ["", "-wal", "-shm"] {
                let mut file = db_path.clone().into_os_string();
                file.push(suffix);
                let file = std::path::PathBuf::from(file);
                if file.exists() {
                    std::fs::remove_file(&file)?;
                }
            }
        }

        // init always creates, regardless of --disable-autoinit
        let mut creating = global.clone();
        creating.disable_autoinit = false;

        let mut db = open_database(&creating, &config)?;
        db.verify_integrity().map_err(CliError::from)?;

        let slots = Database::list_slots(db.connection()).map_err(CliError::from)?;
        println!("Database initialized with {} slots.", slots.len());

        Ok(())
    }
}
