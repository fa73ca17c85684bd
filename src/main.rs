//! Command-line entry point for the harvester.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use medscrape::HarvestConfig;
use medscrape::utils::constants::DEFAULT_SEARCH_URL;

#[derive(Parser, Debug)]
#[command(name = "medscrape", version, about = "Harvest practitioner records from a directory site")]
struct Args {
    /// Directory for snapshots and the exported dataset
    #[arg(short, long, value_name = "DIR", default_value = "./harvest")]
    output_dir: std::path::PathBuf,

    /// Dataset filename inside the output directory
    #[arg(long, value_name = "FILE", default_value = "doctors.csv")]
    output: String,

    /// Search URL template ({specialty}, {region} and {page} placeholders)
    #[arg(long, value_name = "URL", default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// Comma-separated specialties to harvest (defaults to the built-in list)
    #[arg(long, value_delimiter = ',')]
    specialties: Option<Vec<String>>,

    /// Comma-separated localities to harvest (defaults to the built-in list)
    #[arg(long, value_delimiter = ',')]
    localities: Option<Vec<String>>,

    /// Listings taken per specialty/locality combination
    #[arg(long, default_value_t = 5)]
    listings_per_group: usize,

    /// Show the browser window instead of running headless
    #[arg(long)]
    headed: bool,

    /// Skip writing per-listing raw HTML snapshots
    #[arg(long)]
    no_snapshots: bool,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medscrape=info")),
        )
        .init();

    let args = Args::parse();

    let mut builder = HarvestConfig::builder()
        .storage_dir(args.output_dir)
        .search_url(args.search_url)
        .output_filename(args.output)
        .listings_per_group(args.listings_per_group)
        .headless(!args.headed)
        .save_snapshots(!args.no_snapshots)
        .gemini_api_key(std::env::var("GEMINI_API_KEY").ok());

    if let Some(specialties) = args.specialties {
        builder = builder.specialties(specialties);
    }
    if let Some(localities) = args.localities {
        builder = builder.localities(localities);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e:#}");
            return std::process::ExitCode::FAILURE;
        }
    };

    match medscrape::harvest(config).await {
        Ok(report) => {
            println!(
                "{} listings processed, {} complete records written to {}",
                report.listings_processed,
                report.records_exported,
                report.output_path.display()
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("harvest failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
