//! Relation indexing: bidirectional adjacency maps over the four ownership
//! relation lists, plus the entity catalog used to resolve canonical display
//! names.
//!
//! Names are the only join key in this dataset. Keys are case-folded at
//! lookup time only; the stored relations and catalog records keep their
//! original casing so output always displays the entity's canonical spelling.

use std::collections::HashMap;

use crate::dataset::RawDataset;
use crate::model::{Media, Relation};

/// Case-insensitive join key for an entity name.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Both lookup directions over one relation list.
///
/// `owners_of` answers "who points at this entity" (relations by target),
/// `holdings_of` answers "what does this entity point at" (relations by
/// origin). Per-key order matches input order; that order carries no meaning
/// beyond reproducible output.
#[derive(Debug, Default)]
pub struct RelationIndex {
    by_target: HashMap<String, Vec<Relation>>,
    by_origin: HashMap<String, Vec<Relation>>,
}

impl RelationIndex {
    pub fn build(relations: &[Relation]) -> Self {
        let mut by_target: HashMap<String, Vec<Relation>> = HashMap::new();
        let mut by_origin: HashMap<String, Vec<Relation>> = HashMap::new();

        for rel in relations {
            by_target
                .entry(name_key(&rel.target))
                .or_default()
                .push(rel.clone());
            by_origin
                .entry(name_key(&rel.origin))
                .or_default()
                .push(rel.clone());
        }

        RelationIndex { by_target, by_origin }
    }

    /// Relations whose target is `name`. Unknown name yields an empty slice.
    pub fn owners_of(&self, name: &str) -> &[Relation] {
        self.by_target
            .get(&name_key(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Relations whose origin is `name`. Unknown name yields an empty slice.
    pub fn holdings_of(&self, name: &str) -> &[Relation] {
        self.by_origin
            .get(&name_key(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The eight lookup mappings the enrichment passes share: four relation
/// kinds, each indexed in both directions. Built once per run, read-only
/// afterwards.
#[derive(Debug)]
pub struct OwnershipIndexes {
    pub person_media: RelationIndex,
    pub person_organisation: RelationIndex,
    pub organisation_organisation: RelationIndex,
    pub organisation_media: RelationIndex,
}

impl OwnershipIndexes {
    pub fn build(raw: &RawDataset) -> Self {
        OwnershipIndexes {
            person_media: RelationIndex::build(&raw.person_media),
            person_organisation: RelationIndex::build(&raw.person_organisation),
            organisation_organisation: RelationIndex::build(&raw.organisation_organisation),
            organisation_media: RelationIndex::build(&raw.organisation_media),
        }
    }
}

/// Canonical entity records keyed case-insensitively.
///
/// Relations may reference an entity with different casing than the entity
/// list; every displayed name goes through the catalog so output uses the
/// canonical spelling. First occurrence wins on duplicate keys (name
/// collisions are indistinguishable in this dataset).
#[derive(Debug, Default)]
pub struct EntityCatalog {
    persons: HashMap<String, String>,
    organisations: HashMap<String, String>,
    medias: HashMap<String, Media>,
}

impl EntityCatalog {
    pub fn build(raw: &RawDataset) -> Self {
        let mut catalog = EntityCatalog::default();
        for person in &raw.persons {
            catalog
                .persons
                .entry(name_key(&person.name))
                .or_insert_with(|| person.name.clone());
        }
        for org in &raw.organisations {
            catalog
                .organisations
                .entry(name_key(&org.name))
                .or_insert_with(|| org.name.clone());
        }
        for media in &raw.medias {
            catalog
                .medias
                .entry(name_key(&media.name))
                .or_insert_with(|| media.clone());
        }
        catalog
    }

    /// Canonical spelling of a person name, falling back to the queried
    /// string when the person is not in the entity list.
    pub fn person_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.persons
            .get(&name_key(name))
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Canonical spelling of an organisation name.
    pub fn organisation_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.organisations
            .get(&name_key(name))
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Full media record, when the referenced media exists in the entity list.
    pub fn media(&self, name: &str) -> Option<&Media> {
        self.medias.get(&name_key(name))
    }

    /// Canonical spelling of a media name.
    pub fn media_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.media(name).map(|m| m.name.as_str()).unwrap_or(name)
    }

    /// Media type column for a referenced media, empty when unknown.
    pub fn media_type(&self, name: &str) -> String {
        self.media(name)
            .map(|m| m.media_type.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(origin: &str, target: &str, value: &str) -> Relation {
        Relation {
            origin: origin.to_string(),
            target: target.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_index_preserves_input_order() {
        let relations = vec![
            rel("A", "M", "10%"),
            rel("B", "M", "20%"),
            rel("C", "M", "30%"),
        ];
        let index = RelationIndex::build(&relations);
        let owners: Vec<_> = index.owners_of("M").iter().map(|r| r.origin.as_str()).collect();
        assert_eq!(owners, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_index_absent_key_is_empty() {
        let index = RelationIndex::build(&[rel("A", "M", "10%")]);
        assert!(index.owners_of("unknown").is_empty());
        assert!(index.holdings_of("M").is_empty());
    }

    #[test]
    fn test_index_lookup_is_case_insensitive() {
        let index = RelationIndex::build(&[rel("NJJ Presse", "Le Monde", "100%")]);
        assert_eq!(index.owners_of("le monde").len(), 1);
        assert_eq!(index.owners_of("LE MONDE").len(), 1);
        assert_eq!(index.holdings_of("njj presse").len(), 1);
        // Stored relation keeps its original casing
        assert_eq!(index.owners_of("le monde")[0].origin, "NJJ Presse");
    }

    #[test]
    fn test_index_both_directions() {
        let relations = vec![rel("A", "M1", "10%"), rel("A", "M2", "20%")];
        let index = RelationIndex::build(&relations);
        assert_eq!(index.holdings_of("A").len(), 2);
        assert_eq!(index.owners_of("M1").len(), 1);
        assert_eq!(index.owners_of("M2").len(), 1);
    }

    #[test]
    fn test_catalog_canonical_casing() {
        let raw = RawDataset {
            medias: vec![Media {
                name: "Le Monde".to_string(),
                media_type: "Presse (généraliste)".to_string(),
                ..Default::default()
            }],
            organisations: vec![crate::model::Organisation {
                name: "NJJ Presse".to_string(),
                comment: String::new(),
            }],
            ..Default::default()
        };
        let catalog = EntityCatalog::build(&raw);
        assert_eq!(catalog.media_name("le monde"), "Le Monde");
        assert_eq!(catalog.organisation_name("njj presse"), "NJJ Presse");
        assert_eq!(catalog.media_type("LE MONDE"), "Presse (généraliste)");
        // Unknown names fall back to the queried spelling
        assert_eq!(catalog.media_name("Inconnu"), "Inconnu");
        assert_eq!(catalog.media_type("Inconnu"), "");
    }

    #[test]
    fn test_catalog_first_entry_wins_on_collision() {
        let raw = RawDataset {
            persons: vec![
                crate::model::Person {
                    name: "Jean Dupont".to_string(),
                    ..Default::default()
                },
                crate::model::Person {
                    name: "JEAN DUPONT".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let catalog = EntityCatalog::build(&raw);
        assert_eq!(catalog.person_name("jean dupont"), "Jean Dupont");
    }
}
