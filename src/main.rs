// src/main.rs
mod mbnet;
mod parser;
mod stats;
mod storage;
mod utils;

use chrono::{Duration, Local};
use clap::Parser;

use mbnet::client;
use mbnet::models::DEFAULT_ARCHIVE_URL;
use storage::CacheManager;
use utils::error::StatsError;
use utils::AppError;

/// Command Line Interface for the Multi Lotek frequency histogram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the draw archive
    #[arg(long, default_value = DEFAULT_ARCHIVE_URL)]
    url: String,

    /// Directory holding one cached archive per download day
    #[arg(short, long, default_value = "./results")]
    results_dir: String,

    /// Rolling window length in days, counted back from the latest draw
    #[arg(short, long, default_value_t = 367)]
    window_days: i64,

    /// Lowest number included in the histogram
    #[arg(long, default_value_t = 1)]
    min_number: u32,

    /// Highest number included in the histogram
    #[arg(long, default_value_t = 49)]
    max_number: u32,

    /// Verify the archive host's TLS certificate instead of accepting it as-is
    #[arg(long)]
    strict_tls: bool,
}

fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.min_number > args.max_number {
        return Err(AppError::Config(format!(
            "--min-number {} must not exceed --max-number {}",
            args.min_number, args.max_number
        )));
    }

    if args.window_days < 1 {
        return Err(AppError::Config(
            "--window-days must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse and validate CLI arguments
    let args = Args::parse();
    validate_args(&args)?;
    tracing::info!("Archive URL: {}", args.url);
    tracing::info!("Saving downloaded archives to {}", args.results_dir);

    // 3. Initialize the download cache
    let cache = CacheManager::new(&args.results_dir)?;

    // 4. Reuse today's archive if present, otherwise download and cache it
    let today = Local::now().date_naive();
    let (archive, freshly_downloaded) = match cache.load_archive(today)? {
        Some(contents) => (contents, false),
        None => {
            let contents = client::download_archive(&args.url, args.strict_tls).await?;
            cache.save_archive(today, &contents)?;
            (contents, true)
        }
    };

    // 5. Parse the archive and order draws by sequence number
    let mut draws = parser::parse_archive(&archive);
    if draws.is_empty() {
        return Err(StatsError::EmptyArchive.into());
    }
    draws.sort_by_key(|draw| draw.seq_no);

    // A fresh download gets a metadata sidecar next to its cache file
    if freshly_downloaded {
        if let Err(e) = cache.save_archive_metadata(today, &args.url, archive.len(), &draws) {
            tracing::warn!("Failed to save archive metadata: {}", e);
        }
    }

    // 6. The window ends at the latest draw and reaches back --window-days
    let end_date = draws[draws.len() - 1].date;
    let start_date = end_date - Duration::days(args.window_days);
    tracing::info!("Start date: {}", start_date);
    tracing::info!("End date: {}", end_date);

    // 7. Aggregate, rank and print
    let frequencies = stats::number_frequencies(
        start_date,
        end_date,
        args.min_number,
        args.max_number,
        &draws,
    )?;
    let ranked = stats::rank_frequencies(&frequencies);

    tracing::info!("Sorted results:");
    print!("{}", stats::render_table(&ranked));

    Ok(())
}
