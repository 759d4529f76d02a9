//! In-memory snapshot of the character → corporation → alliance hierarchy.
//!
//! The snapshot is loaded with exactly two bulk queries and then serves every
//! ancestor lookup and expansion join for one resolution without further
//! database traffic. The hierarchy is acyclic and at most two hops deep, so a
//! character's ancestor chain is exactly {character, corporation, alliance?}.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::eve::{character::CharacterRepository, corporation::CorporationRepository},
    error::Error,
    model::access::{AffiliationSet, EntityRef},
};

pub struct AffiliationIndex {
    character_corporation: HashMap<i64, i64>,
    corporation_alliance: HashMap<i64, Option<i64>>,
}

impl AffiliationIndex {
    pub fn new(
        character_corporations: Vec<(i64, i64)>,
        corporation_alliances: Vec<(i64, Option<i64>)>,
    ) -> Self {
        Self {
            character_corporation: character_corporations.into_iter().collect(),
            corporation_alliance: corporation_alliances.into_iter().collect(),
        }
    }

    /// Load the current snapshot from the database.
    pub async fn load(db: &DatabaseConnection) -> Result<Self, Error> {
        let character_corporations = CharacterRepository::new(db).get_affiliation_pairs().await?;
        let corporation_alliances = CorporationRepository::new(db).get_affiliation_pairs().await?;

        Ok(Self::new(character_corporations, corporation_alliances))
    }

    /// The corporation a character belongs to. Unknown characters have no
    /// ancestors.
    pub fn corporation_of(&self, character_id: i64) -> Option<i64> {
        self.character_corporation.get(&character_id).copied()
    }

    /// The alliance a corporation belongs to, if any.
    pub fn alliance_of(&self, corporation_id: i64) -> Option<i64> {
        self.corporation_alliance
            .get(&corporation_id)
            .copied()
            .flatten()
    }

    /// The alliance at the top of a character's ancestor chain, if any.
    pub fn alliance_of_character(&self, character_id: i64) -> Option<i64> {
        self.corporation_of(character_id)
            .and_then(|corporation_id| self.alliance_of(corporation_id))
    }

    pub fn characters(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.character_corporation
            .iter()
            .map(|(&character_id, &corporation_id)| (character_id, corporation_id))
    }

    pub fn corporations(&self) -> impl Iterator<Item = (i64, Option<i64>)> + '_ {
        self.corporation_alliance
            .iter()
            .map(|(&corporation_id, &alliance_id)| (corporation_id, alliance_id))
    }

    /// Every known character and corporation ID, the unrestricted set a
    /// superuser resolves to.
    pub fn universe(&self) -> AffiliationSet {
        let characters = self
            .character_corporation
            .keys()
            .map(|&id| EntityRef::character(id));
        let corporations = self
            .corporation_alliance
            .keys()
            .map(|&id| EntityRef::corporation(id));

        characters.chain(corporations).collect()
    }
}
