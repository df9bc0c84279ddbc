// Starship Roster Library
// Pulls starships from SWAPI and reports who has flown them

pub mod models;
pub mod client;
pub mod operations;
pub mod error;
pub mod config;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    starship::Starship,
    pilot::Pilot,
    responses::PageEnvelope,
};

pub use client::{JsonFetcher, SwapiClient};
pub use operations::{PilotResolver, ReportBuilder};
pub use config::{ConfigOverrides, RosterConfig};
pub use error::{Result, RosterError};

// Constants
pub const API_BASE_URL: &str = "https://swapi.dev/api";
pub const CONFIG_FILE: &str = "starship_roster.toml";
