// Starship Roster - Main Entry Point
// Lists every SWAPI starship that has pilots, with the pilots' names

use clap::Parser;
use std::process::ExitCode;

use starship_roster::{
    config::ConfigOverrides, operations::run_report, verbosity, Result, RosterConfig, SwapiClient, CONFIG_FILE,
};

#[derive(Parser, Debug)]
#[command(name = "starship-roster", version, about = "Report SWAPI starships and the pilots who flew them")]
struct Cli {
    /// Configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: String,

    /// API root, e.g. https://swapi.dev/api
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum number of starship pages to request
    #[arg(long)]
    max_pages: Option<u32>,

    /// Append every API call to this file
    #[arg(long)]
    api_log: Option<String>,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write the effective configuration to --config and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout,
            max_pages: self.max_pages,
            api_log_path: self.api_log.clone(),
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = RosterConfig::resolve(&cli.config, &cli.overrides())?;

    if cli.init_config {
        config.save(&cli.config)?;
        eprintln!("💡 Wrote configuration to {}", cli.config);
        return Ok(());
    }

    config.print_summary();

    let client = SwapiClient::new(&config)?;
    let mut stdout = std::io::stdout();
    run_report(&client, &config, &mut stdout).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    verbosity::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("run failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
