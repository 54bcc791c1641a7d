//! Organisation enrichment: direct owners, direct subsidiaries, directly
//! held media. No recursion here; the deep chains live on the media views.

use serde::{Deserialize, Serialize};

use super::{direct_owners, DirectOwner, HeldMedia, OrganisationStake};
use crate::dataset::RawDataset;
use crate::index::{EntityCatalog, OwnershipIndexes};

/// An organisation with its immediate ownership neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedOrganisation {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "commentaire")]
    pub comment: String,
    #[serde(rename = "proprietaires")]
    pub owners: Vec<DirectOwner>,
    #[serde(rename = "filiales")]
    pub subsidiaries: Vec<OrganisationStake>,
    #[serde(rename = "medias")]
    pub medias: Vec<HeldMedia>,
}

/// Enrich every organisation, in input order.
pub fn enrich_organisations(
    raw: &RawDataset,
    indexes: &OwnershipIndexes,
    catalog: &EntityCatalog,
) -> Vec<EnrichedOrganisation> {
    raw.organisations
        .iter()
        .map(|org| EnrichedOrganisation {
            name: org.name.clone(),
            comment: org.comment.clone(),
            owners: direct_owners(
                &org.name,
                &indexes.person_organisation,
                &indexes.organisation_organisation,
                catalog,
            ),
            subsidiaries: indexes
                .organisation_organisation
                .holdings_of(&org.name)
                .iter()
                .map(|rel| OrganisationStake {
                    name: catalog.organisation_name(&rel.target).to_string(),
                    qualifier: rel.qualifier.clone(),
                    value: rel.value.clone(),
                })
                .collect(),
            medias: indexes
                .organisation_media
                .holdings_of(&org.name)
                .iter()
                .map(|rel| HeldMedia {
                    name: catalog.media_name(&rel.target).to_string(),
                    media_type: catalog.media_type(&rel.target),
                    qualifier: rel.qualifier.clone(),
                    value: rel.value.clone(),
                    via: None,
                })
                .collect(),
        })
        .collect()
}
