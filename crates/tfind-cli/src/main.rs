mod finder;
mod render;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tfind")]
#[command(about = "Find movie theatres near a location")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for theatres and show the map view
    Search {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Search, then show the details list
    List {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Search, then load the web page of one theatre from the list
    Open {
        #[command(flatten)]
        location: LocationArgs,

        /// 1-based row in the details list
        #[arg(long)]
        row: usize,
    },
    /// Search, then print driving directions to one theatre from the list
    Directions {
        #[command(flatten)]
        location: LocationArgs,

        /// 1-based row in the details list
        #[arg(long)]
        row: usize,
    },
    /// Print the effective configuration
    Config,
}

/// The device's location fix. Omitting both means no fix is available.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct LocationArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lng: Option<f64>,
}

impl LocationArgs {
    pub(crate) fn coordinate(self) -> Option<tfind_core::Coordinate> {
        Some(tfind_core::Coordinate::new(self.lat?, self.lng?))
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tfind_core::load_app_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(
        directory_url = %config.directory_url,
        radius_meters = config.search_radius_meters,
        "configuration loaded"
    );

    match cli.command {
        Commands::Search { location } => finder::run_search(&config, location).await,
        Commands::List { location } => finder::run_list(&config, location).await,
        Commands::Open { location, row } => finder::run_open(&config, location, row).await,
        Commands::Directions { location, row } => {
            finder::run_directions(&config, location, row).await
        }
        Commands::Config => {
            println!("{config:#?}");
            Ok(())
        }
    }
}
