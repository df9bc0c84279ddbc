// Pilot resolution: follow a starship's people links
use crate::client::JsonFetcher;
use crate::error::{Result, RosterError};
use crate::models::{map_pilot, Pilot, Starship};

pub struct PilotResolver<'a, F: JsonFetcher + ?Sized> {
    client: &'a F,
    people_url: String,
}

impl<'a, F: JsonFetcher + ?Sized> PilotResolver<'a, F> {
    pub fn new(client: &'a F, people_url: impl Into<String>) -> Self {
        Self {
            client,
            people_url: people_url.into(),
        }
    }

    /// Refuse anything outside the people collection
    pub fn validate_reference(&self, url: &str) -> Result<()> {
        if url.starts_with(&self.people_url) {
            Ok(())
        } else {
            Err(RosterError::InvalidReference {
                url: url.to_string(),
                expected_prefix: self.people_url.clone(),
            })
        }
    }

    pub async fn fetch_pilot(&self, url: &str) -> Result<Pilot> {
        self.validate_reference(url)?;
        let body = self.client.fetch(url, &[]).await?;
        map_pilot(body)
    }

    /// One pilot per `pilot_urls` entry, same order. Repeated URLs are fetched again.
    pub async fn resolve_pilots(&self, starship: &Starship) -> Result<Vec<Pilot>> {
        for url in &starship.pilot_urls {
            self.validate_reference(url)?;
        }

        let mut pilots = Vec::with_capacity(starship.pilot_urls.len());
        for url in &starship.pilot_urls {
            let pilot = self.fetch_pilot(url).await?;
            tracing::debug!("{} flown by {}", starship.name, pilot.name);
            pilots.push(pilot);
        }
        Ok(pilots)
    }

    /// Resolve and attach pilots to the starship
    pub async fn crew_starship(&self, starship: &mut Starship) -> Result<()> {
        let pilots = self.resolve_pilots(starship).await?;
        starship.pilots = pilots;
        Ok(())
    }
}
