//! Kind-tagged entity references and the set type the affiliation resolution
//! engine computes over.
//!
//! A numeric EVE ID is only unique within its own id-space, so every
//! membership test pairs the ID with its [`EntityKind`]. Set combination is
//! expressed through named bulk operations rather than per-element queries.

use std::collections::HashSet;

pub use entity::heimdall_affiliation_rule::{EntityKind, RuleType};

use crate::model::access::AffiliatedIdsDto;

/// A single entity identified by EVE ID and id-space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub id: i64,
    pub kind: EntityKind,
}

impl EntityRef {
    pub fn character(id: i64) -> Self {
        Self {
            id,
            kind: EntityKind::Character,
        }
    }

    pub fn corporation(id: i64) -> Self {
        Self {
            id,
            kind: EntityKind::Corporation,
        }
    }

    pub fn alliance(id: i64) -> Self {
        Self {
            id,
            kind: EntityKind::Alliance,
        }
    }
}

/// A deduplicated set of kind-tagged entity IDs with bulk set-algebra
/// operations. This is both the engine's working representation and its
/// output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffiliationSet {
    entries: HashSet<EntityRef>,
}

impl AffiliationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: EntityRef) {
        self.entries.insert(entry);
    }

    pub fn contains(&self, entry: &EntityRef) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        self.entries.iter()
    }

    /// Merge another set into this one, consuming both.
    pub fn union(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Remove every entry present in `other`.
    pub fn subtract(mut self, other: &Self) -> Self {
        self.entries.retain(|entry| !other.contains(entry));
        self
    }

    /// All IDs belonging to one id-space, sorted for deterministic output.
    pub fn ids_of_kind(&self, kind: EntityKind) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl Extend<EntityRef> for AffiliationSet {
    fn extend<T: IntoIterator<Item = EntityRef>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl FromIterator<EntityRef> for AffiliationSet {
    fn from_iter<T: IntoIterator<Item = EntityRef>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AffiliationSet {
    type Item = EntityRef;
    type IntoIter = std::collections::hash_set::IntoIter<EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<&AffiliationSet> for AffiliatedIdsDto {
    fn from(set: &AffiliationSet) -> Self {
        Self {
            character_ids: set.ids_of_kind(EntityKind::Character),
            corporation_ids: set.ids_of_kind(EntityKind::Corporation),
            alliance_ids: set.ids_of_kind(EntityKind::Alliance),
        }
    }
}

impl From<&AffiliatedIdsDto> for AffiliationSet {
    fn from(dto: &AffiliatedIdsDto) -> Self {
        let characters = dto.character_ids.iter().map(|&id| EntityRef::character(id));
        let corporations = dto
            .corporation_ids
            .iter()
            .map(|&id| EntityRef::corporation(id));
        let alliances = dto.alliance_ids.iter().map(|&id| EntityRef::alliance(id));

        characters.chain(corporations).chain(alliances).collect()
    }
}

/// Affiliation rules applying to one (user, permission) query, partitioned by
/// rule type, along with the roles that contributed them.
#[derive(Clone, Debug, Default)]
pub struct RuleSets {
    pub role_ids: Vec<i32>,
    pub allowed: Vec<EntityRef>,
    pub inverse: Vec<EntityRef>,
    pub forbidden: Vec<EntityRef>,
}

impl RuleSets {
    pub fn partition(
        role_ids: Vec<i32>,
        rules: Vec<entity::heimdall_affiliation_rule::Model>,
    ) -> Self {
        let mut sets = Self {
            role_ids,
            ..Default::default()
        };

        for rule in rules {
            let target = EntityRef {
                id: rule.affiliatable_id,
                kind: rule.affiliatable_kind,
            };

            match rule.rule_type {
                RuleType::Allowed => sets.allowed.push(target),
                RuleType::Inverse => sets.inverse.push(target),
                RuleType::Forbidden => sets.forbidden.push(target),
            }
        }

        sets
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.inverse.is_empty() && self.forbidden.is_empty()
    }
}
