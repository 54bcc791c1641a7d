//! Statistics over the enriched snapshot: global totals and ownership
//! concentration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enrich::EnrichedDataset;

/// Entity totals for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub medias: usize,
    pub personnes: usize,
    pub organisations: usize,
}

/// Dataset-wide counters. Group-by keys are sorted for deterministic output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(rename = "totaux")]
    pub totals: Totals,
    #[serde(rename = "mediasParType")]
    pub medias_by_type: BTreeMap<String, usize>,
    #[serde(rename = "mediasParPrix")]
    pub medias_by_price: BTreeMap<String, usize>,
    #[serde(rename = "mediasDisparus")]
    pub defunct_medias: usize,
}

/// One row of a concentration ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationEntry {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "nbMedias")]
    pub media_count: usize,
}

/// Who holds the most media: top persons (direct + via organisations) and
/// top organisations (direct only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcentrationStats {
    #[serde(rename = "parPersonnes")]
    pub by_person: Vec<ConcentrationEntry>,
    #[serde(rename = "parOrganisations")]
    pub by_organisation: Vec<ConcentrationEntry>,
}

/// Compute global totals and group-by counters. Empty type/price strings are
/// excluded from the groupings.
pub fn global_stats(enriched: &EnrichedDataset) -> GlobalStats {
    let mut medias_by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut medias_by_price: BTreeMap<String, usize> = BTreeMap::new();

    for media in &enriched.medias {
        if !media.media_type.is_empty() {
            *medias_by_type.entry(media.media_type.clone()).or_default() += 1;
        }
        if !media.price.is_empty() {
            *medias_by_price.entry(media.price.clone()).or_default() += 1;
        }
    }

    GlobalStats {
        totals: Totals {
            medias: enriched.medias.len(),
            personnes: enriched.persons.len(),
            organisations: enriched.organisations.len(),
        },
        medias_by_type,
        medias_by_price,
        defunct_medias: enriched.medias.iter().filter(|m| m.defunct).count(),
    }
}

/// Compute the top-`top` concentration rankings. Zero-count entries are
/// dropped; ties keep input order (stable sort).
pub fn concentration_stats(enriched: &EnrichedDataset, top: usize) -> ConcentrationStats {
    let mut by_person: Vec<ConcentrationEntry> = enriched
        .persons
        .iter()
        .map(|p| ConcentrationEntry {
            name: p.name.clone(),
            media_count: p.media_direct.len() + p.media_via_organisations.len(),
        })
        .filter(|e| e.media_count > 0)
        .collect();
    by_person.sort_by(|a, b| b.media_count.cmp(&a.media_count));
    by_person.truncate(top);

    let mut by_organisation: Vec<ConcentrationEntry> = enriched
        .organisations
        .iter()
        .map(|o| ConcentrationEntry {
            name: o.name.clone(),
            media_count: o.medias.len(),
        })
        .filter(|e| e.media_count > 0)
        .collect();
    by_organisation.sort_by(|a, b| b.media_count.cmp(&a.media_count));
    by_organisation.truncate(top);

    ConcentrationStats {
        by_person,
        by_organisation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawDataset;
    use crate::model::{Media, Organisation, Person, Relation};

    fn rel(origin: &str, target: &str) -> Relation {
        Relation {
            origin: origin.to_string(),
            target: target.to_string(),
            value: "100%".to_string(),
            ..Default::default()
        }
    }

    fn fixture() -> EnrichedDataset {
        let raw = RawDataset {
            persons: vec![
                Person {
                    name: "P1".to_string(),
                    ..Default::default()
                },
                Person {
                    name: "P2".to_string(),
                    ..Default::default()
                },
            ],
            medias: vec![
                Media {
                    name: "M1".to_string(),
                    media_type: "Radio".to_string(),
                    price: "Gratuit".to_string(),
                    ..Default::default()
                },
                Media {
                    name: "M2".to_string(),
                    media_type: "Radio".to_string(),
                    defunct: "oui".to_string(),
                    ..Default::default()
                },
                Media {
                    name: "M3".to_string(),
                    media_type: "TV".to_string(),
                    price: "Payant".to_string(),
                    ..Default::default()
                },
            ],
            organisations: vec![
                Organisation {
                    name: "O1".to_string(),
                    comment: String::new(),
                },
                Organisation {
                    name: "O2".to_string(),
                    comment: String::new(),
                },
            ],
            person_media: vec![rel("P1", "M1"), rel("P1", "M2")],
            organisation_media: vec![rel("O1", "M3")],
            ..Default::default()
        };
        EnrichedDataset::build(&raw)
    }

    #[test]
    fn test_global_stats() {
        let stats = global_stats(&fixture());
        assert_eq!(stats.totals.medias, 3);
        assert_eq!(stats.totals.personnes, 2);
        assert_eq!(stats.totals.organisations, 2);
        assert_eq!(stats.medias_by_type["Radio"], 2);
        assert_eq!(stats.medias_by_type["TV"], 1);
        assert_eq!(stats.medias_by_price["Gratuit"], 1);
        // Empty price on M2 excluded from the grouping
        assert_eq!(stats.medias_by_price.len(), 2);
        assert_eq!(stats.defunct_medias, 1);
    }

    #[test]
    fn test_concentration_drops_zero_counts_and_sorts() {
        let stats = concentration_stats(&fixture(), 10);
        assert_eq!(
            stats.by_person,
            vec![ConcentrationEntry {
                name: "P1".to_string(),
                media_count: 2
            }]
        );
        assert_eq!(stats.by_organisation.len(), 1);
        assert_eq!(stats.by_organisation[0].name, "O1");
    }

    #[test]
    fn test_concentration_respects_top() {
        let stats = concentration_stats(&fixture(), 0);
        assert!(stats.by_person.is_empty());
    }
}
