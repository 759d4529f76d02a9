use chrono::Utc;
use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

pub struct AffiliationRuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AffiliationRuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        role_id: i32,
        affiliatable_id: i64,
        affiliatable_kind: EntityKind,
        rule_type: RuleType,
    ) -> Result<entity::heimdall_affiliation_rule::Model, DbErr> {
        let rule = entity::heimdall_affiliation_rule::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            affiliatable_id: ActiveValue::Set(affiliatable_id),
            affiliatable_kind: ActiveValue::Set(affiliatable_kind),
            rule_type: ActiveValue::Set(rule_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        rule.insert(self.db).await
    }

    /// Every rule declared by any of the provided roles, in one query.
    pub async fn get_by_role_ids(
        &self,
        role_ids: &[i32],
    ) -> Result<Vec<entity::heimdall_affiliation_rule::Model>, DbErr> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::HeimdallAffiliationRule::find()
            .filter(
                entity::heimdall_affiliation_rule::Column::RoleId
                    .is_in(role_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    /// Delete a rule, returning the removed entry so callers can invalidate
    /// cached resolutions for the owning role.
    pub async fn delete(
        &self,
        rule_id: i32,
    ) -> Result<Option<entity::heimdall_affiliation_rule::Model>, DbErr> {
        let rule = match entity::prelude::HeimdallAffiliationRule::find_by_id(rule_id)
            .one(self.db)
            .await?
        {
            Some(rule) => rule,
            None => return Ok(None),
        };

        rule.clone().delete(self.db).await?;

        Ok(Some(rule))
    }
}
