use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};

pub struct CorporationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CorporationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        corporation_id: i64,
        name: String,
        ticker: String,
        alliance_entry_id: Option<i32>,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            alliance_id: ActiveValue::Set(alliance_entry_id),
            name: ActiveValue::Set(name),
            ticker: ActiveValue::Set(ticker),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        corporation.insert(self.db).await
    }

    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }

    /// Every known corporation's EVE ID paired with its alliance EVE ID, in
    /// one query. This is one of the two bulk reads backing the identity
    /// hierarchy snapshot.
    pub async fn get_affiliation_pairs(&self) -> Result<Vec<(i64, Option<i64>)>, DbErr> {
        entity::prelude::EveCorporation::find()
            .select_only()
            .column(entity::eve_corporation::Column::CorporationId)
            .column(entity::eve_alliance::Column::AllianceId)
            .join(
                JoinType::LeftJoin,
                entity::eve_corporation::Relation::EveAlliance.def(),
            )
            .into_tuple::<(i64, Option<i64>)>()
            .all(self.db)
            .await
    }
}
