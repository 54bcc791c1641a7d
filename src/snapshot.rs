//! Snapshot persistence: the three enriched collections plus a manifest.
//!
//! Every collection is serialized fully in memory before anything touches
//! disk, and the manifest goes last, so a consumer never observes a snapshot
//! that claims files it doesn't have. The snapshot is replaced wholesale on
//! re-run, never patched.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::enrich::{EnrichedDataset, EnrichedMedia, EnrichedOrganisation, EnrichedPerson};
use crate::error::{MediagraphError, Result};

pub const MEDIAS_FILE: &str = "medias.json";
pub const PERSONS_FILE: &str = "personnes.json";
pub const ORGANISATIONS_FILE: &str = "organisations.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Snapshot schema version, bumped on any change to the enriched JSON shape.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One persisted collection file, with its entry count and content digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    pub entries: usize,
    pub sha256: String,
}

/// Snapshot manifest written alongside the collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    pub files: Vec<ManifestEntry>,
}

/// Write the enriched snapshot to `enriched_dir`, returning the manifest.
pub fn write_snapshot(enriched: &EnrichedDataset, enriched_dir: &Path) -> Result<Manifest> {
    std::fs::create_dir_all(enriched_dir)?;

    // Serialize everything before the first write; an I/O failure midway
    // never leaves a manifest pointing at files that were not written.
    let collections = [
        (MEDIAS_FILE, serde_json::to_string_pretty(&enriched.medias)?, enriched.medias.len()),
        (PERSONS_FILE, serde_json::to_string_pretty(&enriched.persons)?, enriched.persons.len()),
        (
            ORGANISATIONS_FILE,
            serde_json::to_string_pretty(&enriched.organisations)?,
            enriched.organisations.len(),
        ),
    ];

    let mut files = Vec::with_capacity(collections.len());
    for (name, body, entries) in &collections {
        let path = enriched_dir.join(name);
        std::fs::write(&path, body)?;
        log::info!("Wrote {} ({} entries)", path.display(), entries);
        files.push(ManifestEntry {
            file: name.to_string(),
            entries: *entries,
            sha256: sha256_hex(body.as_bytes()),
        });
    }

    let manifest = Manifest {
        version: SNAPSHOT_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        files,
    };
    std::fs::write(
        enriched_dir.join(MANIFEST_FILE),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    Ok(manifest)
}

/// Load a previously written snapshot (used by the stats CLI).
pub fn load_snapshot(enriched_dir: &Path) -> Result<EnrichedDataset> {
    if !enriched_dir.join(MEDIAS_FILE).exists() {
        return Err(MediagraphError::Snapshot(format!(
            "no snapshot found in {} (run the enrich binary first)",
            enriched_dir.display()
        )));
    }

    let medias: Vec<EnrichedMedia> = read_collection(&enriched_dir.join(MEDIAS_FILE))?;
    let persons: Vec<EnrichedPerson> = read_collection(&enriched_dir.join(PERSONS_FILE))?;
    let organisations: Vec<EnrichedOrganisation> =
        read_collection(&enriched_dir.join(ORGANISATIONS_FILE))?;

    Ok(EnrichedDataset {
        medias,
        persons,
        organisations,
    })
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
