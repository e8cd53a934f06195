//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, seed data,
//! and constants related to the database schema for the carpark store.

/// Current schema version for the database.
///
/// Stored in the metadata table and used to ensure compatibility between
/// the database and the application. Seeding of slots and reference data
/// happens exactly once, when the version is first written.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Number of parking slots provisioned when no explicit count is given.
pub const DEFAULT_SLOT_COUNT: u32 = 10;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the vehicles table.
///
/// One row per vehicle, keyed by the unique license plate. Created on
/// first check-in, never deleted by the normal flow.
pub const CREATE_VEHICLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Vehicles (
        id INTEGER PRIMARY KEY,
        license_plate TEXT NOT NULL UNIQUE,
        vehicle_type TEXT NOT NULL
    )";

/// SQL statement to create the movements table.
///
/// One row per check-in attempt. Timestamps are wall-clock TEXT in the
/// canonical format; `checkout_time` stays NULL until check-out.
pub const CREATE_MOVEMENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS VehicleMovements (
        id INTEGER PRIMARY KEY,
        license_plate TEXT NOT NULL,
        owner_gender TEXT,
        checked_in INTEGER NOT NULL DEFAULT 0,
        checked_out INTEGER NOT NULL DEFAULT 0,
        checkin_time TEXT NOT NULL,
        checkout_time TEXT,
        passengers TEXT
    )";

/// SQL statement to create the reservations table.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Reservations (
        id INTEGER PRIMARY KEY,
        license_plate TEXT NOT NULL,
        reservation_start TEXT NOT NULL,
        reservation_end TEXT NOT NULL,
        slot_number INTEGER NOT NULL,
        reserved_on TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'active'
    )";

/// SQL statement to create the parking slots table.
///
/// Slots are pre-provisioned at initialization and only ever flip status
/// between 'available' and 'occupied' at runtime.
pub const CREATE_SLOTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS ParkingSlots (
        slot_number INTEGER PRIMARY KEY,
        status TEXT NOT NULL DEFAULT 'available'
    )";

/// SQL statement to create the vehicle model reference table.
pub const CREATE_MODELS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS VehicleModels (
        id INTEGER PRIMARY KEY,
        brand TEXT NOT NULL,
        model TEXT NOT NULL
    )";

/// SQL statement to create an index on the movements plate column.
///
/// Speeds up the active-movement predicate checked on every check-in
/// and check-out.
pub const CREATE_MOVEMENT_PLATE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_movements_plate
    ON VehicleMovements(license_plate)";

/// SQL statement to create the one-active-movement guard.
///
/// Partial unique index: at most one row per plate may be checked in and
/// not checked out. This enforces the active-movement invariant at the
/// store level, so concurrent check-ins racing past the application
/// check cannot both insert.
pub const CREATE_ACTIVE_MOVEMENT_GUARD: &str = r"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_movements_one_active
    ON VehicleMovements(license_plate)
    WHERE checked_in = 1 AND checked_out = 0";

/// SQL statement to create an index on the reservations plate column.
pub const CREATE_RESERVATION_PLATE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_plate
    ON Reservations(license_plate)";

/// SQL statement to create an index on the reservations status column.
///
/// Speeds up the one-active-reservation count and the active listings.
pub const CREATE_RESERVATION_STATUS_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_status
    ON Reservations(status)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to seed one parking slot row.
pub const INSERT_SLOT: &str =
    "INSERT INTO ParkingSlots (slot_number, status) VALUES (?, 'available')";

/// SQL statement to seed one vehicle model row.
pub const INSERT_MODEL: &str = "INSERT INTO VehicleModels (brand, model) VALUES (?, ?)";

/// Reference brand/model pairs seeded at initialization.
///
/// Backs the vehicle-type choices offered by the presentation layer.
pub const VEHICLE_MODELS: &[(&str, &str)] = &[
    ("Toyota", "Corolla"),
    ("Toyota", "Camry"),
    ("Toyota", "RAV4"),
    ("Toyota", "Highlander"),
    ("Toyota", "Tacoma"),
    ("Toyota", "Tundra"),
    ("Toyota", "Prius"),
    ("Toyota", "Sienna"),
    ("Honda", "Civic"),
    ("Honda", "Accord"),
    ("Honda", "CR-V"),
    ("Honda", "Pilot"),
    ("Honda", "Fit"),
    ("Honda", "HR-V"),
    ("Honda", "Odyssey"),
    ("Honda", "Ridgeline"),
    ("Ford", "Focus"),
    ("Ford", "Fusion"),
    ("Ford", "Mustang"),
    ("Ford", "Escape"),
    ("Ford", "Explorer"),
    ("Ford", "F-150"),
    ("Ford", "Edge"),
    ("Ford", "Expedition"),
    ("Chevrolet", "Malibu"),
    ("Chevrolet", "Cruze"),
    ("Chevrolet", "Equinox"),
    ("Chevrolet", "Tahoe"),
    ("Chevrolet", "Suburban"),
    ("Chevrolet", "Silverado"),
    ("Chevrolet", "Traverse"),
    ("Chevrolet", "Blazer"),
    ("Nissan", "Altima"),
    ("Nissan", "Sentra"),
    ("Nissan", "Maxima"),
    ("Nissan", "Rogue"),
    ("Nissan", "Murano"),
    ("Nissan", "Pathfinder"),
    ("Nissan", "Frontier"),
    ("Nissan", "Titan"),
    ("BMW", "3 Series"),
    ("BMW", "5 Series"),
    ("BMW", "7 Series"),
    ("BMW", "X3"),
    ("BMW", "X5"),
    ("BMW", "X7"),
    ("BMW", "Z4"),
    ("BMW", "i3"),
    ("Mercedes-Benz", "C-Class"),
    ("Mercedes-Benz", "E-Class"),
    ("Mercedes-Benz", "S-Class"),
    ("Mercedes-Benz", "GLA"),
    ("Mercedes-Benz", "GLC"),
    ("Mercedes-Benz", "GLE"),
    ("Mercedes-Benz", "GLS"),
    ("Mercedes-Benz", "AMG GT"),
    ("Audi", "A3"),
    ("Audi", "A4"),
    ("Audi", "A6"),
    ("Audi", "Q3"),
    ("Audi", "Q5"),
    ("Audi", "Q7"),
    ("Audi", "Q8"),
    ("Audi", "R8"),
    ("Volkswagen", "Golf"),
    ("Volkswagen", "Passat"),
    ("Volkswagen", "Jetta"),
    ("Volkswagen", "Tiguan"),
    ("Volkswagen", "Atlas"),
    ("Volkswagen", "Touareg"),
    ("Volkswagen", "Beetle"),
    ("Volkswagen", "Arteon"),
    ("Hyundai", "Elantra"),
    ("Hyundai", "Sonata"),
    ("Hyundai", "Tucson"),
    ("Hyundai", "Santa Fe"),
    ("Hyundai", "Palisade"),
    ("Hyundai", "Kona"),
    ("Hyundai", "Venue"),
    ("Hyundai", "Ioniq"),
    ("Kia", "Optima"),
    ("Kia", "Forte"),
    ("Kia", "Sportage"),
    ("Kia", "Sorento"),
    ("Kia", "Telluride"),
    ("Kia", "Soul"),
    ("Kia", "Stinger"),
    ("Kia", "Seltos"),
    ("Subaru", "Impreza"),
    ("Subaru", "Legacy"),
    ("Subaru", "Outback"),
    ("Subaru", "Forester"),
    ("Subaru", "Crosstrek"),
    ("Subaru", "Ascent"),
    ("Subaru", "WRX"),
    ("Subaru", "BRZ"),
    ("Tesla", "Model S"),
    ("Tesla", "Model 3"),
    ("Tesla", "Model X"),
    ("Tesla", "Model Y"),
    ("Tesla", "Roadster"),
    ("Tesla", "Cybertruck"),
];
