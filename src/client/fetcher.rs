use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// GET a URL and hand back the parsed JSON body.
///
/// `SwapiClient` talks to the real API; anything else implementing this
/// (an in-memory table in tests, say) can drive the paginator and resolver.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Value>;
}
