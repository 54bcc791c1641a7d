use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use mediagraph::snapshot::write_snapshot;
use mediagraph::{Config, EnrichedDataset, RawDataset};

#[derive(Parser, Debug)]
#[command(name = "enrich")]
#[command(about = "Enrich the raw media ownership data and write the snapshot")]
struct Args {
    /// Data directory override (defaults to paths.data_dir from config.toml)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    let args = Args::parse();

    log::info!("Starting enrichment");

    let config = Config::load()?;
    let data_dir = args.data_dir.unwrap_or_else(|| config.data_dir().to_path_buf());
    log::info!("Data directory: {}", data_dir.display());

    // Load the raw inputs
    let start = Instant::now();
    let raw = RawDataset::load(&data_dir)?;
    log::info!("=== Raw data loaded ===");
    log::info!("  Persons: {}", raw.persons.len());
    log::info!("  Medias: {}", raw.medias.len());
    log::info!("  Organisations: {}", raw.organisations.len());
    log::info!("  Relations: {}", raw.relation_count());

    if raw.medias.is_empty() {
        log::warn!("No medias in the raw dataset. Run the fetch binary first.");
    }

    // Build indexes and run the three enrichment passes
    let enriched = EnrichedDataset::build(&raw);
    log::info!("=== Enrichment done ===");
    log::info!("  Medias enriched: {}", enriched.medias.len());
    log::info!("  Persons enriched: {}", enriched.persons.len());
    log::info!("  Organisations enriched: {}", enriched.organisations.len());

    // Persist the snapshot
    let enriched_dir = data_dir.join("enriched");
    let manifest = write_snapshot(&enriched, &enriched_dir)?;

    log::info!("=== Snapshot written ===");
    log::info!("  Directory: {}", enriched_dir.display());
    log::info!("  Version: {}", manifest.version);
    log::info!("  Generated at: {}", manifest.generated_at);
    log::info!("Time: {:?}", start.elapsed());

    Ok(())
}
