use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RosterError};

// Collection page wrapper: {count, next, previous, results}
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub count: Option<u64>,
    pub next: Option<String>,
    pub results: Vec<Value>,
}

impl PageEnvelope {
    pub fn from_value(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(|e| RosterError::Mapping {
            entity: "page",
            reason: e.to_string(),
        })
    }
}
