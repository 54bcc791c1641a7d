//! Raw data model: entities and ownership relations as produced by the
//! TSV → JSON conversion step.
//!
//! Field names follow the upstream French TSV headers exactly (`Nom`,
//! `origine`, `cible`, …) so the JSON files under `main/` and `detailed/`
//! round-trip unchanged. Every value is an opaque string at this stage;
//! parsing (ranks, flags) happens during enrichment.

use serde::{Deserialize, Serialize};

/// A natural person, with Challenges ranking and Forbes billionaire flag
/// columns for each covered year. All eight ranking fields are raw strings;
/// an empty string means "not ranked".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "rangChallenges2024")]
    pub challenges_2024: String,
    #[serde(rename = "milliardaireForbes2024")]
    pub forbes_2024: String,
    #[serde(rename = "rangChallenges2023")]
    pub challenges_2023: String,
    #[serde(rename = "milliardaireForbes2023")]
    pub forbes_2023: String,
    #[serde(rename = "rangChallenges2022")]
    pub challenges_2022: String,
    #[serde(rename = "milliardaireForbes2022")]
    pub forbes_2022: String,
    #[serde(rename = "rangChallenges2021")]
    pub challenges_2021: String,
    #[serde(rename = "milliardaireForbes2021")]
    pub forbes_2021: String,
}

/// A media outlet. `disparu` is the raw "oui"/"" column; it becomes a
/// boolean in the enriched view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "Periodicite")]
    pub periodicity: String,
    #[serde(rename = "Echelle")]
    pub scale: String,
    #[serde(rename = "Prix")]
    pub price: String,
    #[serde(rename = "Disparu")]
    pub defunct: String,
}

/// An organisation (holding, group, association, …).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Organisation {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "commentaire")]
    pub comment: String,
}

/// A directed ownership edge: `origin` owns (part of) `target`.
///
/// `value` is an opaque display string (e.g. `"28.00%"`); it is never parsed
/// as a number by this engine. Four relation kinds exist as four separate
/// input lists: person→media, person→organisation, organisation→organisation
/// and organisation→media.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relation {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "origine")]
    pub origin: String,
    #[serde(rename = "qualificatif")]
    pub qualifier: String,
    #[serde(rename = "valeur")]
    pub value: String,
    #[serde(rename = "cible")]
    pub target: String,
    #[serde(rename = "commentaire", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The kind of entity sitting at the owning end of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "personne")]
    Person,
    #[serde(rename = "organisation")]
    Organisation,
}
