use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

use crate::client::JsonFetcher;
use crate::error::{Result, RosterError};
use crate::models::PageEnvelope;

/// Why a non-null `next` cursor could not be followed
#[derive(Debug, Error, PartialEq)]
pub enum CursorAnomaly {
    #[error("cursor {0} is not a valid URL")]
    Unparsable(String),

    #[error("cursor {0} has no page parameter")]
    MissingPage(String),

    #[error("cursor {cursor} has a non-numeric page {value:?}")]
    BadPage { cursor: String, value: String },
}

/// Read the `page` query parameter out of a `next` cursor URL
pub fn next_page_from_cursor(cursor: &str) -> std::result::Result<u32, CursorAnomaly> {
    let url = Url::parse(cursor).map_err(|_| CursorAnomaly::Unparsable(cursor.to_string()))?;

    let value = url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| CursorAnomaly::MissingPage(cursor.to_string()))?;

    value.parse::<u32>().map_err(|_| CursorAnomaly::BadPage {
        cursor: cursor.to_string(),
        value,
    })
}

/// Walk a collection endpoint from page 1 until `next` is null.
///
/// Page 1 is requested without a `page` parameter, later pages with
/// `page=N` taken from the previous cursor. Records come back in API order.
/// A cursor that cannot be followed, or that does not move forward, is logged
/// and ends the walk with what has been collected. Hitting `max_pages` while a
/// cursor still points onward is an error.
pub async fn fetch_all<F>(fetcher: &F, base_url: &str, max_pages: u32) -> Result<Vec<Value>>
where
    F: JsonFetcher + ?Sized,
{
    let mut records = Vec::new();
    let mut page: u32 = 1;
    let mut pages_fetched: u32 = 0;

    loop {
        let query = if page > 1 {
            vec![("page", page.to_string())]
        } else {
            Vec::new()
        };

        let body = fetcher.fetch(base_url, &query).await?;
        pages_fetched += 1;

        let envelope = PageEnvelope::from_value(body)?;
        tracing::debug!(
            "page {} of {}: {} records (total reported: {:?})",
            page,
            base_url,
            envelope.results.len(),
            envelope.count
        );
        records.extend(envelope.results);

        let Some(cursor) = envelope.next else {
            break;
        };

        let next_page = match next_page_from_cursor(&cursor) {
            Ok(next_page) if next_page > page => next_page,
            Ok(next_page) => {
                tracing::warn!(
                    "cursor {} points back to page {} from page {}; stopping pagination",
                    cursor,
                    next_page,
                    page
                );
                break;
            }
            Err(anomaly) => {
                tracing::warn!("{}; stopping pagination", anomaly);
                break;
            }
        };

        if pages_fetched >= max_pages {
            return Err(RosterError::PageLimit { max_pages });
        }
        page = next_page;
    }

    tracing::info!("fetched {} records from {} in {} pages", records.len(), base_url, pages_fetched);
    Ok(records)
}
