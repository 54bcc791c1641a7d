use anyhow::Result;
use clap::Parser;
use mediagraph::ingest::{fetch_and_convert, DETAILED_FILES, MAIN_FILES};
use mediagraph::Config;

#[derive(Parser, Debug)]
#[command(name = "fetch")]
#[command(about = "Fetch the upstream TSV sources and convert them to raw JSON")]
struct Args {
    /// Source base URL override (defaults to fetch.source_url / GITHUB_SOURCE)
    #[arg(short, long)]
    source: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    let args = Args::parse();

    let config = Config::load()?;
    let source_url = args.source.unwrap_or_else(|| config.fetch.source_url.clone());

    log::info!("Building JSON files from TSV sources");
    log::info!("Source: {}", source_url);

    let client = reqwest::Client::new();

    log::info!("=== Main files ===");
    let main_report =
        fetch_and_convert(&client, &source_url, &MAIN_FILES, &config.main_dir()).await?;

    log::info!("=== Detailed files ===");
    let detailed_report =
        fetch_and_convert(&client, &source_url, &DETAILED_FILES, &config.detailed_dir()).await?;

    log::info!("=== Build complete ===");
    log::info!(
        "Files: {} | Entries: {}",
        main_report.files + detailed_report.files,
        main_report.entries + detailed_report.entries
    );
    log::info!(
        "  Main: {} files | {} entries",
        main_report.files,
        main_report.entries
    );
    log::info!(
        "  Detailed: {} files | {} entries",
        detailed_report.files,
        detailed_report.entries
    );

    Ok(())
}
