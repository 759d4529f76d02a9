use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

pub struct UserCharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserCharacterRepository<'a> {
    /// Creates a new instance of [`UserCharacterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new entry for a character owned by a user
    pub async fn create(
        &self,
        user_id: i32,
        character_entry_id: i32,
        owner_hash: String,
    ) -> Result<entity::heimdall_user_character::Model, DbErr> {
        let user_character = entity::heimdall_user_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_entry_id),
            owner_hash: ActiveValue::Set(owner_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user_character.insert(self.db).await
    }

    /// Get a character and its ownership entry (if any) using the character's
    /// EVE Online ID
    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<
        Option<(
            entity::eve_character::Model,
            Option<entity::heimdall_user_character::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .find_also_related(entity::heimdall_user_character::Entity)
            .one(self.db)
            .await
    }

    /// Gets all character ownership entries for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::heimdall_user_character::Model>, DbErr> {
        entity::prelude::HeimdallUserCharacter::find()
            .filter(entity::heimdall_user_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// EVE character IDs of every character the user owns, in one query.
    /// This feeds the ownership half of affiliation resolution.
    pub async fn get_owned_character_ids(&self, user_id: i32) -> Result<Vec<i64>, DbErr> {
        entity::prelude::HeimdallUserCharacter::find()
            .select_only()
            .column(entity::eve_character::Column::CharacterId)
            .join(
                JoinType::InnerJoin,
                entity::heimdall_user_character::Relation::EveCharacter.def(),
            )
            .filter(entity::heimdall_user_character::Column::UserId.eq(user_id))
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Update a user character entry with a new user id
    ///
    /// # Returns
    /// - `Some(Model)` if the update is successful
    /// - `None` if the entry was not found
    pub async fn update(
        &self,
        user_character_entry_id: i32,
        new_user_id: i32,
    ) -> Result<Option<entity::heimdall_user_character::Model>, DbErr> {
        let user_character =
            match entity::prelude::HeimdallUserCharacter::find_by_id(user_character_entry_id)
                .one(self.db)
                .await?
            {
                Some(user_character) => user_character,
                None => return Ok(None),
            };

        let mut user_character_am = user_character.into_active_model();
        user_character_am.user_id = ActiveValue::Set(new_user_id);
        user_character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user_character = user_character_am.update(self.db).await?;

        Ok(Some(user_character))
    }
}
