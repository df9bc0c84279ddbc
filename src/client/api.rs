use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::JsonFetcher;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};

#[derive(Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    api_log_path: Option<PathBuf>,
}

impl SwapiClient {
    pub fn new(config: &RosterConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .build()
            .map_err(|e| RosterError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(SwapiClient {
            client,
            api_log_path: config.http.api_log_path.as_ref().map(PathBuf::from),
        })
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: Option<&str>) {
        let Some(path) = &self.api_log_path else {
            return;
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            timestamp = timestamp,
            method = method,
            url = url,
            response_status = response_status,
            response_body = response_body.unwrap_or("Not captured")
        );

        if let Err(e) = append_api_log(path, &log_entry) {
            tracing::warn!("cannot write API log {}: {}", path.display(), e);
        }
    }
}

fn append_api_log(path: &Path, entry: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())
}

#[async_trait]
impl JsonFetcher for SwapiClient {
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| RosterError::Transport { url: url.to_string(), source })?;
        let status = response.status().as_u16();
        let request_url = response.url().to_string();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &request_url, status, Some(&error_body));
            return Err(RosterError::Status { url: request_url, status });
        }

        let response_text = response
            .text()
            .await
            .map_err(|source| RosterError::Transport { url: request_url.clone(), source })?;
        self.log_api_call("GET", &request_url, status, Some(&response_text));

        serde_json::from_str(&response_text).map_err(|source| RosterError::Parse { url: request_url, source })
    }
}
