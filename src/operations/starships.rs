// Starship collection operations
use crate::client::{fetch_all, JsonFetcher};
use crate::error::Result;
use crate::models::{map_starship, Starship};

pub struct StarshipOperations<'a, F: JsonFetcher + ?Sized> {
    client: &'a F,
    starships_url: String,
    max_pages: u32,
}

impl<'a, F: JsonFetcher + ?Sized> StarshipOperations<'a, F> {
    pub fn new(client: &'a F, starships_url: impl Into<String>, max_pages: u32) -> Self {
        Self {
            client,
            starships_url: starships_url.into(),
            max_pages,
        }
    }

    /// Every starship the API lists, mapped, in API order
    pub async fn fetch_starships(&self) -> Result<Vec<Starship>> {
        let records = fetch_all(self.client, &self.starships_url, self.max_pages).await?;
        records.into_iter().map(map_starship).collect()
    }
}
