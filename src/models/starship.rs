use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RosterError};
use crate::models::Pilot;

/// Fields the roster needs out of a `/starships/` record
#[derive(Debug, Deserialize)]
struct StarshipRecord {
    name: String,
    model: String,
    #[serde(rename = "pilots")]
    pilot_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Starship {
    pub name: String,
    pub model: String,
    /// People URLs in API order; this order is the printed pilot order
    pub pilot_urls: Vec<String>,
    /// Filled in by `PilotResolver::crew_starship`
    pub pilots: Vec<Pilot>,
    raw: Value,
}

impl Starship {
    pub fn from_record(record: Value) -> Result<Self> {
        let fields = StarshipRecord::deserialize(&record).map_err(|e| RosterError::Mapping {
            entity: "starship",
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: fields.name,
            model: fields.model,
            pilot_urls: fields.pilot_urls,
            pilots: Vec::new(),
            raw: record,
        })
    }

    /// The untouched API record, kept for debugging only
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn has_pilots(&self) -> bool {
        !self.pilot_urls.is_empty()
    }
}

pub fn map_starship(record: Value) -> Result<Starship> {
    Starship::from_record(record)
}
