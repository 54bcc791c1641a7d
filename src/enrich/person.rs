//! Person enrichment: wealth rankings, directly held media, controlled
//! organisations, and media held through those organisations.
//!
//! The via-organisation view is hard-capped at two organisational hops
//! (organisation, then its direct subsidiaries). It deliberately does not
//! reuse the unbounded chain resolver: this view is a holdings summary, not
//! a reachability answer.

use serde::{Deserialize, Serialize};

use super::{HeldMedia, OrganisationStake};
use crate::dataset::RawDataset;
use crate::index::{EntityCatalog, OwnershipIndexes};

/// Challenges rank (null when unranked) and Forbes billionaire flag for each
/// covered year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub challenges2024: Option<i64>,
    pub forbes2024: bool,
    pub challenges2023: Option<i64>,
    pub forbes2023: bool,
    pub challenges2022: Option<i64>,
    pub forbes2022: bool,
    pub challenges2021: Option<i64>,
    pub forbes2021: bool,
}

/// A person with their rankings and holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedPerson {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "classements")]
    pub rankings: Rankings,
    #[serde(rename = "mediasDirects")]
    pub media_direct: Vec<HeldMedia>,
    #[serde(rename = "mediasViaOrganisations")]
    pub media_via_organisations: Vec<HeldMedia>,
    #[serde(rename = "organisations")]
    pub organisations: Vec<OrganisationStake>,
}

/// Parse a raw Challenges rank column.
///
/// Empty or whitespace-only means unranked. Otherwise the value is read like
/// JS `parseInt`: optional sign, then the longest leading digit run
/// (`"12e"` → 12); no leading digit means unranked.
pub fn parse_rank(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end]
        .parse::<i64>()
        .ok()
        .map(|v| if negative { -v } else { v })
}

/// Enrich every person, in input order.
pub fn enrich_persons(
    raw: &RawDataset,
    indexes: &OwnershipIndexes,
    catalog: &EntityCatalog,
) -> Vec<EnrichedPerson> {
    raw.persons
        .iter()
        .map(|person| {
            let media_direct = indexes
                .person_media
                .holdings_of(&person.name)
                .iter()
                .map(|rel| HeldMedia {
                    name: catalog.media_name(&rel.target).to_string(),
                    media_type: catalog.media_type(&rel.target),
                    qualifier: rel.qualifier.clone(),
                    value: rel.value.clone(),
                    via: None,
                })
                .collect();

            let controlled = indexes.person_organisation.holdings_of(&person.name);

            let organisations = controlled
                .iter()
                .map(|rel| OrganisationStake {
                    name: catalog.organisation_name(&rel.target).to_string(),
                    qualifier: rel.qualifier.clone(),
                    value: rel.value.clone(),
                })
                .collect();

            // Two organisational hops, no further: the organisation's own
            // media, then each direct subsidiary's media.
            let mut media_via_organisations = Vec::new();
            for org_rel in controlled {
                let org_name = catalog.organisation_name(&org_rel.target).to_string();

                for media_rel in indexes.organisation_media.holdings_of(&org_rel.target) {
                    media_via_organisations.push(HeldMedia {
                        name: catalog.media_name(&media_rel.target).to_string(),
                        media_type: catalog.media_type(&media_rel.target),
                        qualifier: media_rel.qualifier.clone(),
                        value: media_rel.value.clone(),
                        via: Some(org_name.clone()),
                    });
                }

                for sub_rel in indexes
                    .organisation_organisation
                    .holdings_of(&org_rel.target)
                {
                    let sub_name = catalog.organisation_name(&sub_rel.target);
                    for media_rel in indexes.organisation_media.holdings_of(&sub_rel.target) {
                        media_via_organisations.push(HeldMedia {
                            name: catalog.media_name(&media_rel.target).to_string(),
                            media_type: catalog.media_type(&media_rel.target),
                            qualifier: media_rel.qualifier.clone(),
                            value: media_rel.value.clone(),
                            via: Some(format!("{} → {}", org_name, sub_name)),
                        });
                    }
                }
            }

            EnrichedPerson {
                name: person.name.clone(),
                rankings: Rankings {
                    challenges2024: parse_rank(&person.challenges_2024),
                    forbes2024: !person.forbes_2024.is_empty(),
                    challenges2023: parse_rank(&person.challenges_2023),
                    forbes2023: !person.forbes_2023.is_empty(),
                    challenges2022: parse_rank(&person.challenges_2022),
                    forbes2022: !person.forbes_2022.is_empty(),
                    challenges2021: parse_rank(&person.challenges_2021),
                    forbes2021: !person.forbes_2021.is_empty(),
                },
                media_direct,
                media_via_organisations,
                organisations,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Media, Organisation, Person, Relation};

    fn rel(origin: &str, target: &str, value: &str) -> Relation {
        Relation {
            origin: origin.to_string(),
            target: target.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn media(name: &str, media_type: &str) -> Media {
        Media {
            name: name.to_string(),
            media_type: media_type.to_string(),
            ..Default::default()
        }
    }

    fn org(name: &str) -> Organisation {
        Organisation {
            name: name.to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_parse_rank() {
        assert_eq!(parse_rank(""), None);
        assert_eq!(parse_rank("   "), None);
        assert_eq!(parse_rank("12"), Some(12));
        assert_eq!(parse_rank(" 7 "), Some(7));
        // parseInt semantics: leading digit run wins, trailing text dropped
        assert_eq!(parse_rank("12e"), Some(12));
        assert_eq!(parse_rank("-3"), Some(-3));
        assert_eq!(parse_rank("+4"), Some(4));
        // No leading digit: unranked (serialized as null, like the NaN it replaces)
        assert_eq!(parse_rank("abc"), None);
        assert_eq!(parse_rank("e12"), None);
    }

    #[test]
    fn test_rankings_parsed_from_raw_columns() {
        let mut p = person("Bernard Arnault");
        p.challenges_2024 = "1".to_string();
        p.forbes_2024 = "oui".to_string();
        p.challenges_2023 = String::new();
        p.forbes_2023 = String::new();
        let raw = RawDataset {
            persons: vec![p],
            ..Default::default()
        };
        let indexes = OwnershipIndexes::build(&raw);
        let catalog = EntityCatalog::build(&raw);

        let enriched = enrich_persons(&raw, &indexes, &catalog);
        let rankings = &enriched[0].rankings;
        assert_eq!(rankings.challenges2024, Some(1));
        assert!(rankings.forbes2024);
        assert_eq!(rankings.challenges2023, None);
        assert!(!rankings.forbes2023);
    }

    #[test]
    fn test_direct_media_resolved_with_type() {
        let raw = RawDataset {
            persons: vec![person("P")],
            medias: vec![media("Le Canard", "Presse (hebdomadaire)")],
            person_media: vec![rel("P", "le canard", "100%")],
            ..Default::default()
        };
        let indexes = OwnershipIndexes::build(&raw);
        let catalog = EntityCatalog::build(&raw);

        let enriched = enrich_persons(&raw, &indexes, &catalog);
        let direct = &enriched[0].media_direct;
        assert_eq!(direct.len(), 1);
        // Canonical casing from the entity list, not the relation
        assert_eq!(direct[0].name, "Le Canard");
        assert_eq!(direct[0].media_type, "Presse (hebdomadaire)");
        assert!(direct[0].via.is_none());
    }

    #[test]
    fn test_media_via_organisation_and_subsidiary() {
        let raw = RawDataset {
            persons: vec![person("P")],
            medias: vec![media("M1", "Radio"), media("M2", "TV")],
            organisations: vec![org("Holding"), org("Filiale")],
            person_organisation: vec![rel("P", "Holding", "100%")],
            organisation_organisation: vec![rel("Holding", "Filiale", "50%")],
            organisation_media: vec![rel("Holding", "M1", "80%"), rel("Filiale", "M2", "90%")],
            ..Default::default()
        };
        let indexes = OwnershipIndexes::build(&raw);
        let catalog = EntityCatalog::build(&raw);

        let enriched = enrich_persons(&raw, &indexes, &catalog);
        let via = &enriched[0].media_via_organisations;
        assert_eq!(via.len(), 2);
        assert_eq!(via[0].name, "M1");
        assert_eq!(via[0].via.as_deref(), Some("Holding"));
        assert_eq!(via[1].name, "M2");
        assert_eq!(via[1].via.as_deref(), Some("Holding → Filiale"));
        assert_eq!(enriched[0].organisations.len(), 1);
        assert_eq!(enriched[0].organisations[0].name, "Holding");
    }

    #[test]
    fn test_via_traversal_stops_after_two_hops() {
        // Holding -> Filiale -> SousFiliale -> M: the third hop's media must
        // not appear in the via view.
        let raw = RawDataset {
            persons: vec![person("P")],
            medias: vec![media("M", "TV")],
            organisations: vec![org("Holding"), org("Filiale"), org("SousFiliale")],
            person_organisation: vec![rel("P", "Holding", "100%")],
            organisation_organisation: vec![
                rel("Holding", "Filiale", "100%"),
                rel("Filiale", "SousFiliale", "100%"),
            ],
            organisation_media: vec![rel("SousFiliale", "M", "100%")],
            ..Default::default()
        };
        let indexes = OwnershipIndexes::build(&raw);
        let catalog = EntityCatalog::build(&raw);

        let enriched = enrich_persons(&raw, &indexes, &catalog);
        assert!(enriched[0].media_via_organisations.is_empty());
    }

    #[test]
    fn test_rankings_serialize_null_when_unranked() {
        let raw = RawDataset {
            persons: vec![person("P")],
            ..Default::default()
        };
        let indexes = OwnershipIndexes::build(&raw);
        let catalog = EntityCatalog::build(&raw);

        let enriched = enrich_persons(&raw, &indexes, &catalog);
        let json = serde_json::to_value(&enriched[0]).unwrap();
        assert!(json["classements"]["challenges2024"].is_null());
        assert_eq!(json["classements"]["forbes2024"], false);
        assert!(json.get("mediasViaOrganisations").is_some());
    }
}
