//! Pure rule evaluation over the hierarchy snapshot.
//!
//! All three evaluators are single-pass over the snapshot: rule targets are
//! first grouped into per-kind lookup sets, then every known character and
//! corporation is tested once against those sets. Nothing here touches the
//! database.

use std::collections::HashSet;

use crate::server::{
    model::access::{AffiliationSet, EntityKind, EntityRef},
    service::access::hierarchy::AffiliationIndex,
};

/// Rule targets grouped by the id-space they name.
struct KindTargets {
    characters: HashSet<i64>,
    corporations: HashSet<i64>,
    alliances: HashSet<i64>,
}

impl KindTargets {
    fn group(rules: &[EntityRef]) -> Self {
        let mut targets = Self {
            characters: HashSet::new(),
            corporations: HashSet::new(),
            alliances: HashSet::new(),
        };

        for rule in rules {
            match rule.kind {
                EntityKind::Character => targets.characters.insert(rule.id),
                EntityKind::Corporation => targets.corporations.insert(rule.id),
                EntityKind::Alliance => targets.alliances.insert(rule.id),
            };
        }

        targets
    }

    /// Whether a character falls under any target: named directly, or below a
    /// targeted corporation or alliance.
    fn covers_character(&self, index: &AffiliationIndex, character_id: i64, corporation_id: i64) -> bool {
        self.characters.contains(&character_id)
            || self.corporations.contains(&corporation_id)
            || index
                .alliance_of(corporation_id)
                .is_some_and(|alliance_id| self.alliances.contains(&alliance_id))
    }

    /// Whether a corporation falls under any target: named directly, or below
    /// a targeted alliance. Character targets never cover their ancestors.
    fn covers_corporation(&self, corporation_id: i64, alliance_id: Option<i64>) -> bool {
        self.corporations.contains(&corporation_id)
            || alliance_id.is_some_and(|alliance_id| self.alliances.contains(&alliance_id))
    }
}

/// Expand grant-style rules (ALLOWED, and FORBIDDEN before its ownership
/// reduction) into concrete entity IDs:
///
/// - a character rule contributes that character;
/// - a corporation rule contributes the corporation and every character in it;
/// - an alliance rule contributes the alliance, its corporations, and their
///   characters.
pub fn expand_rules(index: &AffiliationIndex, rules: &[EntityRef]) -> AffiliationSet {
    let mut expanded = AffiliationSet::new();

    if rules.is_empty() {
        return expanded;
    }

    let targets = KindTargets::group(rules);

    // Directly named targets are included as-is; a named character does not
    // need to be known to the hierarchy to be granted.
    expanded.extend(targets.characters.iter().map(|&id| EntityRef::character(id)));
    expanded.extend(
        targets
            .corporations
            .iter()
            .map(|&id| EntityRef::corporation(id)),
    );
    expanded.extend(targets.alliances.iter().map(|&id| EntityRef::alliance(id)));

    for (character_id, corporation_id) in index.characters() {
        if targets.corporations.contains(&corporation_id)
            || index
                .alliance_of(corporation_id)
                .is_some_and(|alliance_id| targets.alliances.contains(&alliance_id))
        {
            expanded.insert(EntityRef::character(character_id));
        }
    }

    for (corporation_id, alliance_id) in index.corporations() {
        if alliance_id.is_some_and(|alliance_id| targets.alliances.contains(&alliance_id)) {
            expanded.insert(EntityRef::corporation(corporation_id));
        }
    }

    expanded
}

/// Evaluate INVERSE rules: everything except the named entities and their
/// descendants.
///
/// Each id-space only contributes when at least one inverse rule of that kind
/// exists; with no rules of a kind, that kind's contribution is empty rather
/// than universal. Within an active kind, an entity is excluded when any
/// inverse rule covers it through downward expansion. Kinds stay independent:
/// a character rule never excludes that character's corporation from the
/// corporation-kind contribution.
pub fn evaluate_inverse(index: &AffiliationIndex, rules: &[EntityRef]) -> AffiliationSet {
    let mut inverted = AffiliationSet::new();

    if rules.is_empty() {
        return inverted;
    }

    let targets = KindTargets::group(rules);

    if !targets.characters.is_empty() {
        for (character_id, corporation_id) in index.characters() {
            if !targets.covers_character(index, character_id, corporation_id) {
                inverted.insert(EntityRef::character(character_id));
            }
        }
    }

    if !targets.corporations.is_empty() {
        for (corporation_id, alliance_id) in index.corporations() {
            if !targets.covers_corporation(corporation_id, alliance_id) {
                inverted.insert(EntityRef::corporation(corporation_id));
            }
        }
    }

    if !targets.alliances.is_empty() {
        let known_alliances: HashSet<i64> = index
            .corporations()
            .filter_map(|(_, alliance_id)| alliance_id)
            .collect();

        for alliance_id in known_alliances {
            if !targets.alliances.contains(&alliance_id) {
                inverted.insert(EntityRef::alliance(alliance_id));
            }
        }
    }

    inverted
}

/// Evaluate FORBIDDEN rules: the same downward expansion as allowed rules,
/// reduced by everything the user owns. Ownership has absolute precedence,
/// so an owned entity can never be forbidden.
pub fn evaluate_forbidden(
    index: &AffiliationIndex,
    rules: &[EntityRef],
    owned: &AffiliationSet,
) -> AffiliationSet {
    expand_rules(index, rules).subtract(owned)
}
