use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterOwnershipModel, EveCharacterModel, UserModel},
    TestSetup,
};

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, main_character_entry_id: i32) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::HeimdallUser::insert(entity::heimdall_user::ActiveModel {
                main_character_id: ActiveValue::Set(main_character_entry_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_user_character_ownership(
        &self,
        user_id: i32,
        character_entry_id: i32,
    ) -> Result<CharacterOwnershipModel, TestError> {
        Ok(entity::prelude::HeimdallUserCharacter::insert(
            entity::heimdall_user_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_entry_id),
                owner_hash: ActiveValue::Set("owner_hash".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a character with its hierarchy, then a user owning it as their
    /// main character.
    pub async fn insert_mock_user_with_character(
        &self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<(UserModel, CharacterOwnershipModel, EveCharacterModel), TestError> {
        let character_model = self
            .setup
            .eve()
            .insert_mock_character(character_id, corporation_id, alliance_id)
            .await?;

        let user_model = self.insert_user(character_model.id).await?;

        let user_character_model = self
            .insert_user_character_ownership(user_model.id, character_model.id)
            .await?;

        Ok((user_model, user_character_model, character_model))
    }

    /// Insert a character with its hierarchy and link it to an existing user.
    pub async fn insert_mock_character_owned_by_user(
        &self,
        user_id: i32,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<(CharacterOwnershipModel, EveCharacterModel), TestError> {
        let character_model = self
            .setup
            .eve()
            .insert_mock_character(character_id, corporation_id, alliance_id)
            .await?;

        let user_character_model = self
            .insert_user_character_ownership(user_id, character_model.id)
            .await?;

        Ok((user_character_model, character_model))
    }
}
