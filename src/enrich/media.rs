//! Media enrichment: direct owners plus the resolved ultimate-owner chains.

use serde::{Deserialize, Serialize};

use super::{direct_owners, DirectOwner};
use crate::chain::{resolve_ultimate_owners, UltimateOwner};
use crate::dataset::RawDataset;
use crate::index::{EntityCatalog, OwnershipIndexes};

/// A media outlet with its full ownership context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedMedia {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(rename = "periodicite")]
    pub periodicity: String,
    #[serde(rename = "echelle")]
    pub scale: String,
    #[serde(rename = "prix")]
    pub price: String,
    #[serde(rename = "disparu")]
    pub defunct: bool,
    #[serde(rename = "proprietaires")]
    pub owners: Vec<DirectOwner>,
    #[serde(rename = "chaineProprietaires")]
    pub ultimate_owners: Vec<UltimateOwner>,
}

/// Enrich every media outlet, in input order.
pub fn enrich_medias(
    raw: &RawDataset,
    indexes: &OwnershipIndexes,
    catalog: &EntityCatalog,
) -> Vec<EnrichedMedia> {
    raw.medias
        .iter()
        .map(|media| EnrichedMedia {
            name: media.name.clone(),
            media_type: media.media_type.clone(),
            periodicity: media.periodicity.clone(),
            scale: media.scale.clone(),
            price: media.price.clone(),
            defunct: media.defunct == "oui",
            owners: direct_owners(
                &media.name,
                &indexes.person_media,
                &indexes.organisation_media,
                catalog,
            ),
            ultimate_owners: resolve_ultimate_owners(&media.name, indexes, catalog),
        })
        .collect()
}
