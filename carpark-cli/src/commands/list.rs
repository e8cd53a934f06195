//! List command implementation.
//!
//! This module implements the `list` command, which displays movements
//! or reservations in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use carpark::{Database, Movement, Reservation};
use clap::{Args, ValueEnum};
use std::io::Write;

/// Column headers for movement output.
const MOVEMENT_HEADERS: [&str; 5] = [
    "plate",
    "owner_gender",
    "checkin_time",
    "checkout_time",
    "passengers",
];

/// Column headers for reservation output.
const RESERVATION_HEADERS: [&str; 6] = [
    "plate",
    "slot",
    "reservation_start",
    "reservation_end",
    "reserved_on",
    "status",
];

/// List movements or reservations.
#[derive(Args)]
pub struct ListCommand {
    /// What to list
    #[arg(value_enum, default_value = "active")]
    pub what: ListKind,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "CARPARK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Keep only rows whose plate contains this substring
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
}

/// Row selection for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListKind {
    /// Vehicles currently inside the lot
    Active,
    /// Closed movement history
    Completed,
    /// All reservation rows
    Reservations,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        match self.what {
            ListKind::Active => {
                let mut movements =
                    Database::list_active_movements(db.connection()).map_err(CliError::from)?;
                apply_movement_filter(&mut movements, self.filter.as_deref());
                output_movements(&movements, self.format)
            }
            ListKind::Completed => {
                let mut movements =
                    Database::list_completed_movements(db.connection()).map_err(CliError::from)?;
                apply_movement_filter(&mut movements, self.filter.as_deref());
                output_movements(&movements, self.format)
            }
            ListKind::Reservations => {
                let mut reservations =
                    Database::list_all_reservations(db.connection()).map_err(CliError::from)?;
                if let Some(ref needle) = self.filter {
                    reservations.retain(|r| r.plate.as_str().contains(needle.as_str()));
                }
                output_reservations(&reservations, self.format)
            }
        }
    }
}

fn apply_movement_filter(movements: &mut Vec<Movement>, filter: Option<&str>) {
    if let Some(needle) = filter {
        movements.retain(|m| m.plate.as_str().contains(needle));
    }
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

fn movement_record(movement: &Movement) -> [String; 5] {
    [
        movement.plate.to_string(),
        movement.owner_gender.clone().unwrap_or_default(),
        movement.checkin_time.clone(),
        movement.checkout_time.clone().unwrap_or_default(),
        movement.passengers.clone().unwrap_or_default(),
    ]
}

fn reservation_record(reservation: &Reservation) -> [String; 6] {
    [
        reservation.plate.to_string(),
        reservation.slot_number.to_string(),
        reservation.reservation_start.clone(),
        reservation.reservation_end.clone(),
        reservation.reserved_on.clone(),
        reservation.status.to_string(),
    ]
}

fn output_movements(movements: &[Movement], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            format_as_table(&MOVEMENT_HEADERS, movements.iter().map(movement_record))
        }
        OutputFormat::Json => {
            let json_data: Vec<serde_json::Value> = movements
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "plate": m.plate.as_str(),
                        "owner_gender": m.owner_gender,
                        "checkin_time": m.checkin_time,
                        "checkout_time": m.checkout_time,
                        "passengers": m.passengers,
                    })
                })
                .collect();
            format_as_json(&json_data)
        }
        OutputFormat::Csv => format_as_delimited(
            &MOVEMENT_HEADERS,
            movements.iter().map(movement_record),
            b',',
        ),
        OutputFormat::Tsv => format_as_delimited(
            &MOVEMENT_HEADERS,
            movements.iter().map(movement_record),
            b'\t',
        ),
    }
}

fn output_reservations(reservations: &[Reservation], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => format_as_table(
            &RESERVATION_HEADERS,
            reservations.iter().map(reservation_record),
        ),
        OutputFormat::Json => {
            let json_data: Vec<serde_json::Value> = reservations
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "plate": r.plate.as_str(),
                        "slot": r.slot_number.value(),
                        "reservation_start": r.reservation_start,
                        "reservation_end": r.reservation_end,
                        "reserved_on": r.reserved_on,
                        "status": r.status.to_string(),
                    })
                })
                .collect();
            format_as_json(&json_data)
        }
        OutputFormat::Csv => format_as_delimited(
            &RESERVATION_HEADERS,
            reservations.iter().map(reservation_record),
            b',',
        ),
        OutputFormat::Tsv => format_as_delimited(
            &RESERVATION_HEADERS,
            reservations.iter().map(reservation_record),
            b'\t',
        ),
    }
}

/// Format rows as a human-readable table.
fn format_as_table<const N: usize>(
    headers: &[&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        let line = row
            .iter()
            .map(|cell| if cell.is_empty() { "-" } else { cell.as_str() })
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(handle, "{line}")?;
    }

    Ok(())
}

/// Format rows as JSON.
fn format_as_json(json_data: &[serde_json::Value]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Format rows as delimited output (CSV or TSV).
fn format_as_delimited<const N: usize>(
    headers: &[&str; N],
    rows: impl Iterator<Item = [String; N]>,
    delimiter: u8,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(headers).map_err(csv_error)?;

    for row in rows {
        writer.write_record(&row).map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
