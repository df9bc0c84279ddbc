use thiserror::Error;

/// Everything that can abort a roster run
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot map {entity} record: {reason}")]
    Mapping { entity: &'static str, reason: String },

    #[error("invalid reference {url}: expected a URL under {expected_prefix}")]
    InvalidReference { url: String, expected_prefix: String },

    #[error("pagination stopped after {max_pages} pages while the API still reported more")]
    PageLimit { max_pages: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to write configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
