// Report generation: "<starship>: <pilot>, <pilot>" per piloted starship
use std::io::Write;

use crate::client::JsonFetcher;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::models::Starship;
use crate::operations::{PilotResolver, StarshipOperations};

/// Render one report line (without the newline) from an already crewed starship
pub fn format_line(starship: &Starship) -> String {
    let names: Vec<&str> = starship.pilots.iter().map(|p| p.name.as_str()).collect();
    format!("{}: {}", starship.name, names.join(", "))
}

pub struct ReportBuilder<'a, F: JsonFetcher + ?Sized> {
    resolver: PilotResolver<'a, F>,
}

impl<'a, F: JsonFetcher + ?Sized> ReportBuilder<'a, F> {
    pub fn new(resolver: PilotResolver<'a, F>) -> Self {
        Self { resolver }
    }

    /// Write one line per starship that has pilots, in the order given.
    ///
    /// Starships without pilot links are skipped. A line is only written once
    /// all of its pilots resolved, so an error never leaves half a line
    /// behind. Returns the number of lines written.
    pub async fn write_report<W: Write>(&self, starships: Vec<Starship>, out: &mut W) -> Result<usize> {
        let mut lines = 0;

        for mut starship in starships {
            if !starship.has_pilots() {
                tracing::debug!("skipping {} ({}): no pilots", starship.name, starship.model);
                continue;
            }

            self.resolver.crew_starship(&mut starship).await?;
            writeln!(out, "{}", format_line(&starship))?;
            lines += 1;
        }

        out.flush()?;
        Ok(lines)
    }
}

/// Fetch every starship, resolve pilots and write the report
pub async fn run_report<F, W>(client: &F, config: &RosterConfig, out: &mut W) -> Result<usize>
where
    F: JsonFetcher + ?Sized,
    W: Write,
{
    let starships = StarshipOperations::new(client, config.api.starships_url(), config.pagination.max_pages)
        .fetch_starships()
        .await?;
    tracing::info!("🚀 {} starships fetched", starships.len());

    let builder = ReportBuilder::new(PilotResolver::new(client, config.api.people_url()));
    let lines = builder.write_report(starships, out).await?;
    tracing::info!("📋 {} starships reported", lines);
    Ok(lines)
}
