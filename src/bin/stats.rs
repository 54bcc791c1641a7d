use anyhow::Result;
use mediagraph::snapshot::load_snapshot;
use mediagraph::stats::{concentration_stats, global_stats};
use mediagraph::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let enriched = load_snapshot(&config.enriched_dir())?;

    println!("\n=== Mediagraph Snapshot Statistics ===\n");

    let global = global_stats(&enriched);

    println!("Totals:");
    println!("  Medias:        {}", global.totals.medias);
    println!("  Persons:       {}", global.totals.personnes);
    println!("  Organisations: {}", global.totals.organisations);
    println!("  Defunct medias: {}", global.defunct_medias);

    println!("\nMedias by type:\n");
    println!("{:-<60}", "");
    println!("{:<45} {:>10}", "Type", "Count");
    println!("{:-<60}", "");
    for (media_type, count) in &global.medias_by_type {
        println!("{:<45} {:>10}", media_type, count);
    }
    println!("{:-<60}", "");

    println!("\nMedias by price:\n");
    println!("{:-<60}", "");
    println!("{:<45} {:>10}", "Price", "Count");
    println!("{:-<60}", "");
    for (price, count) in &global.medias_by_price {
        println!("{:<45} {:>10}", price, count);
    }
    println!("{:-<60}", "");

    let concentration = concentration_stats(&enriched, config.stats.top);

    println!(
        "\nTop {} persons by held media (direct + via organisations):\n",
        config.stats.top
    );
    println!("{:-<60}", "");
    println!("{:<45} {:>10}", "Person", "Medias");
    println!("{:-<60}", "");
    for entry in &concentration.by_person {
        println!("{:<45} {:>10}", entry.name, entry.media_count);
    }
    println!("{:-<60}", "");

    println!("\nTop {} organisations by directly held media:\n", config.stats.top);
    println!("{:-<60}", "");
    println!("{:<45} {:>10}", "Organisation", "Medias");
    println!("{:-<60}", "");
    for entry in &concentration.by_organisation {
        println!("{:<45} {:>10}", entry.name, entry.media_count);
    }
    println!("{:-<60}", "");

    println!();

    Ok(())
}
