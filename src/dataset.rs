//! Raw dataset loading.
//!
//! Reads the seven JSON files produced by the fetch step: three entity lists
//! under `<data_dir>/main/` and four relation lists under
//! `<data_dir>/detailed/`. Entity lists are required; a missing relation list
//! degrades to an empty list with a warning, so a partial upstream export
//! still enriches instead of failing.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::model::{Media, Organisation, Person, Relation};

pub const PERSONS_JSON: &str = "personnes.json";
pub const MEDIAS_JSON: &str = "medias.json";
pub const ORGANISATIONS_JSON: &str = "organisations.json";

pub const PERSON_MEDIA_JSON: &str = "personne-media.json";
pub const PERSON_ORGANISATION_JSON: &str = "personne-organisation.json";
pub const ORGANISATION_ORGANISATION_JSON: &str = "organisation-organisation.json";
pub const ORGANISATION_MEDIA_JSON: &str = "organisation-media.json";

/// Immutable input snapshot for one pipeline run: the three entity lists and
/// the four ownership relation lists, in upstream order.
#[derive(Debug, Default)]
pub struct RawDataset {
    pub persons: Vec<Person>,
    pub medias: Vec<Media>,
    pub organisations: Vec<Organisation>,
    pub person_media: Vec<Relation>,
    pub person_organisation: Vec<Relation>,
    pub organisation_organisation: Vec<Relation>,
    pub organisation_media: Vec<Relation>,
}

impl RawDataset {
    /// Load all raw inputs from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let main_dir = data_dir.join("main");
        let detailed_dir = data_dir.join("detailed");

        Ok(RawDataset {
            persons: load_json(&main_dir.join(PERSONS_JSON))?,
            medias: load_json(&main_dir.join(MEDIAS_JSON))?,
            organisations: load_json(&main_dir.join(ORGANISATIONS_JSON))?,
            person_media: load_relations(&detailed_dir.join(PERSON_MEDIA_JSON))?,
            person_organisation: load_relations(&detailed_dir.join(PERSON_ORGANISATION_JSON))?,
            organisation_organisation: load_relations(
                &detailed_dir.join(ORGANISATION_ORGANISATION_JSON),
            )?,
            organisation_media: load_relations(&detailed_dir.join(ORGANISATION_MEDIA_JSON))?,
        })
    }

    /// Total number of relations across all four lists.
    pub fn relation_count(&self) -> usize {
        self.person_media.len()
            + self.person_organisation.len()
            + self.organisation_organisation.len()
            + self.organisation_media.len()
    }
}

/// Read a JSON array file into typed records. Missing file is an error.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a relation list, treating an absent file as an empty list.
///
/// Lookups over missing relation data must yield empty results rather than
/// errors, so the loader applies the same policy to the file itself.
fn load_relations(path: &Path) -> Result<Vec<Relation>> {
    if !path.exists() {
        log::warn!(
            "Relation list {} not found, continuing with no relations of that kind",
            path.display()
        );
        return Ok(Vec::new());
    }
    load_json(path)
}
