//! `trains` - next departures between two UK stations.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use train_board::credentials::Credentials;
use train_board::itinerary::render_itinerary;
use train_board::stations::StationDirectory;
use train_board::transport_api::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TransportClient, TransportConfig,
};

/// Show the next trains from one station that call at another.
#[derive(Parser)]
#[command(name = "trains")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example:\n  trains RDG PAD    trains from Reading to London Paddington")]
struct Cli {
    /// Three-letter CRS code of the departure station
    #[arg(required_unless_present = "list_stations")]
    from: Option<String>,

    /// Three-letter CRS code of the station the trains must call at
    #[arg(required_unless_present = "list_stations")]
    to: Option<String>,

    /// Verbose output on stderr (-v for requests, departures and stops, -vv for response bodies)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Station reference table (CSV with "Station Name" and "CRS Code" columns)
    #[arg(long, value_name = "PATH")]
    stations: Option<PathBuf>,

    /// TransportAPI base URL
    #[arg(long, env = "TRANSPORT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the station directory as JSON and exit
    #[arg(long, conflicts_with_all = ["from", "to"])]
    list_stations: bool,
}

/// Log filter for a verbosity count. Only this crate gets louder.
fn log_filter_from_verbosity(verbose: u8) -> String {
    let level = match verbose {
        0 => return "warn".to_string(),
        1 => "debug",
        _ => "trace",
    };
    format!("warn,train_board={level},trains={level}")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stations = match &cli.stations {
        Some(path) => StationDirectory::load_path(path),
        None => StationDirectory::bundled(),
    }
    .context("failed to load station table")?;
    info!(stations = stations.len(), "station directory loaded");

    if cli.list_stations {
        println!("{}", stations.to_json());
        return Ok(());
    }

    let (Some(from), Some(to)) = (cli.from.as_deref(), cli.to.as_deref()) else {
        anyhow::bail!("both <FROM> and <TO> station codes are required");
    };

    let credentials = Credentials::resolve()?;
    let query = stations.validate(from, to)?;

    let config = TransportConfig::new(credentials)
        .with_base_url(cli.base_url)
        .with_timeout(cli.timeout);
    let client = TransportClient::new(config)?;

    let itinerary = render_itinerary(&client, &query).await?;
    print!("{itinerary}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_codes_and_verbose_flag() {
        let cli = Cli::try_parse_from(["trains", "RDG", "PAD", "-v"]).unwrap();
        assert_eq!(cli.from.as_deref(), Some("RDG"));
        assert_eq!(cli.to.as_deref(), Some("PAD"));
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn codes_are_required() {
        assert!(Cli::try_parse_from(["trains", "RDG"]).is_err());
    }

    #[test]
    fn list_stations_needs_no_codes() {
        let cli = Cli::try_parse_from(["trains", "--list-stations"]).unwrap();
        assert!(cli.list_stations);
        assert!(cli.from.is_none());
    }

    #[test]
    fn verbosity_filters() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(
            log_filter_from_verbosity(1),
            "warn,train_board=debug,trains=debug"
        );
        assert_eq!(
            log_filter_from_verbosity(3),
            "warn,train_board=trace,trains=trace"
        );
    }
}
