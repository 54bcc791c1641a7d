//! Enrichment passes: denormalized views of medias, persons and
//! organisations, each carrying its ownership context.
//!
//! All three passes read the same immutable indexes; none mutates shared
//! state. Output order follows the entity input lists, and per-entity lists
//! follow relation input order, so two runs over the same input serialize
//! byte-identically.

pub mod media;
pub mod organisation;
pub mod person;

pub use media::{enrich_medias, EnrichedMedia};
pub use organisation::{enrich_organisations, EnrichedOrganisation};
pub use person::{enrich_persons, parse_rank, EnrichedPerson};

use serde::{Deserialize, Serialize};

use crate::dataset::RawDataset;
use crate::index::{EntityCatalog, OwnershipIndexes, RelationIndex};
use crate::model::EntityKind;

/// A direct owner of a media or organisation, tagged with its entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectOwner {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(rename = "qualificatif")]
    pub qualifier: String,
    #[serde(rename = "valeur")]
    pub value: String,
}

/// A stake in an organisation: the organisation plus the edge's qualifier
/// and value. Used both for a person's controlled organisations and for an
/// organisation's subsidiaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganisationStake {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "qualificatif")]
    pub qualifier: String,
    #[serde(rename = "valeur")]
    pub value: String,
}

/// A media held by a person or organisation, optionally tagged with the
/// organisation path (`via`) it is held through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldMedia {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(rename = "qualificatif")]
    pub qualifier: String,
    #[serde(rename = "valeur")]
    pub value: String,
    #[serde(rename = "via", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub via: Option<String>,
}

/// The three enriched collections produced by one pipeline run.
#[derive(Debug)]
pub struct EnrichedDataset {
    pub medias: Vec<EnrichedMedia>,
    pub persons: Vec<EnrichedPerson>,
    pub organisations: Vec<EnrichedOrganisation>,
}

impl EnrichedDataset {
    /// Run the full enrichment: build the catalog and the eight relation
    /// mappings, then the three passes.
    pub fn build(raw: &RawDataset) -> Self {
        let catalog = EntityCatalog::build(raw);
        let indexes = OwnershipIndexes::build(raw);

        EnrichedDataset {
            medias: enrich_medias(raw, &indexes, &catalog),
            persons: enrich_persons(raw, &indexes, &catalog),
            organisations: enrich_organisations(raw, &indexes, &catalog),
        }
    }
}

/// Direct owners of `target`: person edges first, then organisation edges,
/// each list in input order. An entity with no incoming edges yields an
/// empty list.
pub(crate) fn direct_owners(
    target: &str,
    person_edges: &RelationIndex,
    organisation_edges: &RelationIndex,
    catalog: &EntityCatalog,
) -> Vec<DirectOwner> {
    let mut owners = Vec::new();

    for rel in person_edges.owners_of(target) {
        owners.push(DirectOwner {
            name: catalog.person_name(&rel.origin).to_string(),
            kind: EntityKind::Person,
            qualifier: rel.qualifier.clone(),
            value: rel.value.clone(),
        });
    }

    for rel in organisation_edges.owners_of(target) {
        owners.push(DirectOwner {
            name: catalog.organisation_name(&rel.origin).to_string(),
            kind: EntityKind::Organisation,
            qualifier: rel.qualifier.clone(),
            value: rel.value.clone(),
        });
    }

    owners
}
