use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RosterError};

#[derive(Debug, Deserialize)]
struct PilotRecord {
    name: String,
}

#[derive(Debug, Clone)]
pub struct Pilot {
    pub name: String,
    raw: Value,
}

impl Pilot {
    pub fn from_record(record: Value) -> Result<Self> {
        let fields = PilotRecord::deserialize(&record).map_err(|e| RosterError::Mapping {
            entity: "pilot",
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: fields.name,
            raw: record,
        })
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

pub fn map_pilot(record: Value) -> Result<Pilot> {
    Pilot::from_record(record)
}
