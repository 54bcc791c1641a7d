//! Ownership chain resolution: for a media outlet, find every natural person
//! that ultimately controls it, with the full path of intermediate
//! organisations.
//!
//! The ownership graph may contain cycles (cross-holdings) and diamonds (the
//! same person reachable through two different chains). A visited set broken
//! off per branch guards against cycles without collapsing diamonds: each
//! distinct control path is reported as its own entry. Traversal cost is
//! exponential on pathologically dense graphs; real ownership graphs are
//! small and shallow.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::index::{name_key, EntityCatalog, OwnershipIndexes};

/// A natural person ultimately controlling a media outlet, with the chain of
/// entities leading to it.
///
/// `path[0]` is the person, `path[last]` the owner directly above the media.
/// `final_value` is the value of the media-adjacent edge, not a compounded
/// stake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UltimateOwner {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "chemin")]
    pub path: Vec<String>,
    #[serde(rename = "valeurFinale")]
    pub final_value: String,
}

/// A person reached by climbing organisation edges, and the organisations
/// crossed on the way (person first, media-adjacent organisation excluded).
#[derive(Debug, Clone)]
struct ClimbedChain {
    person: String,
    path: Vec<String>,
}

/// Resolve every ultimate owner of `media_name`.
///
/// Direct person owners come first, each with a single-element path. Then,
/// for every organisation owning the media, the organisation graph is
/// climbed; every person found contributes one entry per distinct path, the
/// media-adjacent organisation appended last. An unknown media name yields
/// an empty list.
pub fn resolve_ultimate_owners(
    media_name: &str,
    indexes: &OwnershipIndexes,
    catalog: &EntityCatalog,
) -> Vec<UltimateOwner> {
    let mut owners = Vec::new();

    for rel in indexes.person_media.owners_of(media_name) {
        let person = catalog.person_name(&rel.origin).to_string();
        owners.push(UltimateOwner {
            name: person.clone(),
            path: vec![person],
            final_value: rel.value.clone(),
        });
    }

    for rel in indexes.organisation_media.owners_of(media_name) {
        let holder = catalog.organisation_name(&rel.origin).to_string();
        for chain in climb_organisation(&rel.origin, indexes) {
            let mut path = Vec::with_capacity(chain.path.len() + 1);
            path.push(catalog.person_name(&chain.person).to_string());
            for org in &chain.path[1..] {
                path.push(catalog.organisation_name(org).to_string());
            }
            path.push(holder.clone());
            owners.push(UltimateOwner {
                name: path[0].clone(),
                // valeurFinale is the media-adjacent edge, however deep the chain
                final_value: rel.value.clone(),
                path,
            });
        }
    }

    owners
}

/// Climb the organisation ownership graph from `org_name` up to every
/// reachable person.
///
/// Depth-first with an explicit stack; each branch carries its own copy of
/// the visited set plus the organisation suffix accumulated so far, so
/// enumeration order and diamond semantics match a recursive walk with a
/// per-call visited copy. Visited keys are case-folded like every other
/// lookup.
fn climb_organisation(org_name: &str, indexes: &OwnershipIndexes) -> Vec<ClimbedChain> {
    struct Branch {
        org: String,
        visited: HashSet<String>,
        suffix: Vec<String>,
    }

    let mut chains = Vec::new();
    let mut stack = vec![Branch {
        org: org_name.to_string(),
        visited: HashSet::new(),
        suffix: Vec::new(),
    }];

    while let Some(Branch { org, mut visited, suffix }) = stack.pop() {
        // Cycle guard: an organisation already on this branch's path is
        // dropped, truncating the chain instead of looping.
        if !visited.insert(name_key(&org)) {
            continue;
        }

        for rel in indexes.person_organisation.owners_of(&org) {
            let mut path = Vec::with_capacity(suffix.len() + 1);
            path.push(rel.origin.clone());
            path.extend(suffix.iter().cloned());
            chains.push(ClimbedChain {
                person: rel.origin.clone(),
                path,
            });
        }

        // Reverse push keeps branch exploration in edge order under LIFO.
        for rel in indexes.organisation_organisation.owners_of(&org).iter().rev() {
            let mut branch_suffix = Vec::with_capacity(suffix.len() + 1);
            branch_suffix.push(rel.origin.clone());
            branch_suffix.extend(suffix.iter().cloned());
            stack.push(Branch {
                org: rel.origin.clone(),
                visited: visited.clone(),
                suffix: branch_suffix,
            });
        }
    }

    chains
}
