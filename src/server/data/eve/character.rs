use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        character_id: i64,
        name: String,
        corporation_entry_id: i32,
    ) -> Result<entity::eve_character::Model, DbErr> {
        let character = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            corporation_id: ActiveValue::Set(corporation_entry_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character::Model>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Every known character's EVE ID paired with its corporation's EVE ID,
    /// in one query. This is one of the two bulk reads backing the identity
    /// hierarchy snapshot.
    pub async fn get_affiliation_pairs(&self) -> Result<Vec<(i64, i64)>, DbErr> {
        entity::prelude::EveCharacter::find()
            .select_only()
            .column(entity::eve_character::Column::CharacterId)
            .column(entity::eve_corporation::Column::CorporationId)
            .join(
                JoinType::InnerJoin,
                entity::eve_character::Relation::EveCorporation.def(),
            )
            .into_tuple::<(i64, i64)>()
            .all(self.db)
            .await
    }

    /// In-game corporate roles for a batch of characters, keyed by character
    /// EVE ID. One query regardless of how many characters are asked for.
    pub async fn get_corporation_roles_by_character_ids(
        &self,
        character_ids: &[i64],
    ) -> Result<Vec<(i64, String)>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EveCharacterCorporationRole::find()
            .select_only()
            .column(entity::eve_character::Column::CharacterId)
            .column(entity::eve_character_corporation_role::Column::Role)
            .join(
                JoinType::InnerJoin,
                entity::eve_character_corporation_role::Relation::EveCharacter.def(),
            )
            .filter(entity::eve_character::Column::CharacterId.is_in(character_ids.iter().copied()))
            .into_tuple::<(i64, String)>()
            .all(self.db)
            .await
    }
}
