//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CancelCommand, CheckInCommand, CheckOutCommand, InitCommand, ListCommand, ModelsCommand,
    ReserveCommand, SlotsCommand, StatusCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing a small parking lot.
#[derive(Parser)]
#[command(name = "carpark")]
#[command(version, about = "Manage car park check-ins and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "CARPARK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "CARPARK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "CARPARK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Record a vehicle entering the lot
    CheckIn(CheckInCommand),

    /// Record a vehicle leaving the lot
    CheckOut(CheckOutCommand),

    /// Reserve a parking slot for a plate
    Reserve(ReserveCommand),

    /// Cancel a plate's reservations
    Cancel(CancelCommand),

    /// List movements or reservations
    List(ListCommand),

    /// Show the slot map
    Slots(SlotsCommand),

    /// Show the vehicle model reference list
    Models(ModelsCommand),

    /// Show lot occupancy counts
    Status(StatusCommand),

    /// Initialize the database explicitly
    Init(InitCommand),
}
