//! Upstream ingestion: fetch the seven TSV source files and convert them to
//! the raw JSON layout the pipeline consumes (`main/` entity lists,
//! `detailed/` relation lists).

pub mod tsv;

pub use tsv::parse_tsv;

use std::path::Path;

use crate::error::{MediagraphError, Result};

/// Entity list sources, converted into `<data_dir>/main/`.
pub const MAIN_FILES: [&str; 3] = ["personnes.tsv", "medias.tsv", "organisations.tsv"];

/// Relation list sources, converted into `<data_dir>/detailed/`.
pub const DETAILED_FILES: [&str; 4] = [
    "personne-media.tsv",
    "personne-organisation.tsv",
    "organisation-organisation.tsv",
    "organisation-media.tsv",
];

/// Outcome of converting one group of source files.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub files: usize,
    pub entries: usize,
}

/// Fetch one TSV file from the configured source.
pub async fn fetch_tsv(
    client: &reqwest::Client,
    source_url: &str,
    filename: &str,
) -> Result<String> {
    let url = format!("{}/{}", source_url.trim_end_matches('/'), filename);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(MediagraphError::Fetch(format!(
            "failed to fetch {}: {}",
            filename,
            response.status()
        )));
    }

    Ok(response.text().await?)
}

/// Fetch every file in `files`, decode it and write the JSON conversion to
/// `out_dir`, preserving the upstream base name (`personnes.tsv` →
/// `personnes.json`).
pub async fn fetch_and_convert(
    client: &reqwest::Client,
    source_url: &str,
    files: &[&str],
    out_dir: &Path,
) -> Result<FetchReport> {
    std::fs::create_dir_all(out_dir)?;

    let mut report = FetchReport::default();

    for filename in files {
        log::info!("Processing {}", filename);

        let text = fetch_tsv(client, source_url, filename).await?;
        let records = parse_tsv(&text)?;

        let json_name = filename.replace(".tsv", ".json");
        let out_path = out_dir.join(&json_name);
        std::fs::write(&out_path, serde_json::to_string_pretty(&records)?)?;

        log::info!("  → {} ({} entries)", out_path.display(), records.len());

        report.files += 1;
        report.entries += records.len();
    }

    Ok(report)
}
