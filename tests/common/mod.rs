//! Shared helpers for the roster integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use starship_roster::{JsonFetcher, Result, RosterConfig};

pub const BASE_URL: &str = "https://swapi.test/api";

pub fn starships_url() -> String {
    format!("{}/starships/", BASE_URL)
}

pub fn person_url(id: u32) -> String {
    format!("{}/people/{}/", BASE_URL, id)
}

pub fn test_config() -> RosterConfig {
    let mut config = RosterConfig::default();
    config.api.base_url = BASE_URL.to_string();
    config
}

/// In-memory API keyed by the full request URL (query string included)
#[derive(Default)]
pub struct ScriptedFetcher {
    bodies: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: Value) -> Self {
        self.bodies.insert(url.into(), body);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|c| *c == url).count()
    }
}

#[async_trait]
impl JsonFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let full = if query.is_empty() {
            url.to_string()
        } else {
            let qs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}?{}", url, qs.join("&"))
        };
        self.calls.lock().unwrap().push(full.clone());

        match self.bodies.get(&full) {
            Some(body) => Ok(body.clone()),
            None => Err(starship_roster::RosterError::Status { url: full, status: 404 }),
        }
    }
}

/// Minimal HTTP/1.1 responder on 127.0.0.1 for exercising the real client
pub struct TestServer {
    listener: TcpListener,
}

impl TestServer {
    pub async fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        Self { listener }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.listener.local_addr().unwrap())
    }

    /// Serve `routes` (request target -> status, body) until the test ends
    pub fn start(self, routes: HashMap<String, (u16, String)>) {
        let routes = Arc::new(routes);
        let listener = self.listener;

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        let n = socket.read(&mut chunk).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        request.extend_from_slice(&chunk[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let target = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let (status, body) = routes
                        .get(&target)
                        .cloned()
                        .unwrap_or((404, r#"{"detail":"Not found"}"#.to_string()));
                    let reason = if status == 200 { "OK" } else { "Error" };

                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
    }
}
