//! EVE entity database insertion utilities.
//!
//! Insertion methods create parent entities automatically when they are
//! referenced but missing, keeping foreign keys satisfied without requiring
//! tests to build the full hierarchy by hand. Re-inserting an existing EVE ID
//! returns the existing record instead of failing the unique constraint.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{CorporationRoleModel, EveAllianceModel, EveCharacterModel, EveCorporationModel},
    TestSetup,
};

impl TestSetup {
    pub fn eve(&self) -> EveFixtures<'_> {
        EveFixtures { setup: self }
    }
}

pub struct EveFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> EveFixtures<'a> {
    /// Insert a mock alliance, returning the existing record if the alliance
    /// ID is already present.
    pub async fn insert_mock_alliance(
        &self,
        alliance_id: i64,
    ) -> Result<EveAllianceModel, TestError> {
        if let Some(existing_alliance) = entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(&self.setup.state.db)
            .await?
        {
            return Ok(existing_alliance);
        }

        Ok(
            entity::prelude::EveAlliance::insert(entity::eve_alliance::ActiveModel {
                alliance_id: ActiveValue::Set(alliance_id),
                name: ActiveValue::Set(format!("Test Alliance {}", alliance_id)),
                ticker: ActiveValue::Set("TEST".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a mock corporation, creating its alliance first when one is
    /// referenced. Returns the existing record for an already-known ID.
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<EveCorporationModel, TestError> {
        if let Some(existing_corporation) = entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(&self.setup.state.db)
            .await?
        {
            return Ok(existing_corporation);
        }

        let alliance_entry_id = match alliance_id {
            Some(alliance_id) => Some(self.insert_mock_alliance(alliance_id).await?.id),
            None => None,
        };

        Ok(
            entity::prelude::EveCorporation::insert(entity::eve_corporation::ActiveModel {
                corporation_id: ActiveValue::Set(corporation_id),
                alliance_id: ActiveValue::Set(alliance_entry_id),
                name: ActiveValue::Set(format!("Test Corporation {}", corporation_id)),
                ticker: ActiveValue::Set("TSTC".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a mock character with its full hierarchy, creating corporation
    /// and alliance records as needed.
    pub async fn insert_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<EveCharacterModel, TestError> {
        if let Some(existing_character) = entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(&self.setup.state.db)
            .await?
        {
            return Ok(existing_character);
        }

        let corporation = self
            .insert_mock_corporation(corporation_id, alliance_id)
            .await?;

        Ok(
            entity::prelude::EveCharacter::insert(entity::eve_character::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                corporation_id: ActiveValue::Set(corporation.id),
                name: ActiveValue::Set(format!("Test Character {}", character_id)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Attach an in-game corporate role to a character entry.
    pub async fn insert_corporation_role(
        &self,
        character_entry_id: i32,
        role: &str,
    ) -> Result<CorporationRoleModel, TestError> {
        Ok(entity::prelude::EveCharacterCorporationRole::insert(
            entity::eve_character_corporation_role::ActiveModel {
                character_id: ActiveValue::Set(character_entry_id),
                role: ActiveValue::Set(role.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
