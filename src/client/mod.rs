// Client module - SWAPI HTTP access and page walking
pub mod api;
pub mod fetcher;
pub mod paginator;

pub use api::SwapiClient;
pub use fetcher::JsonFetcher;
pub use paginator::{fetch_all, next_page_from_cursor, CursorAnomaly};
