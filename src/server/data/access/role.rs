use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<entity::heimdall_role::Model, DbErr> {
        let role = entity::heimdall_role::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        role.insert(self.db).await
    }

    pub async fn grant_permission(
        &self,
        role_id: i32,
        permission: String,
    ) -> Result<entity::heimdall_role_permission::Model, DbErr> {
        let grant = entity::heimdall_role_permission::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            permission: ActiveValue::Set(permission),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        grant.insert(self.db).await
    }

    pub async fn add_member(
        &self,
        role_id: i32,
        user_id: i32,
    ) -> Result<entity::heimdall_role_member::Model, DbErr> {
        let member = entity::heimdall_role_member::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    /// IDs of roles the user is a member of that grant the permission.
    ///
    /// Two set-oriented queries: membership first, then the permission filter
    /// over the collected role IDs. An unknown permission simply yields an
    /// empty list.
    pub async fn role_ids_with_permission_for_user(
        &self,
        user_id: i32,
        permission: &str,
    ) -> Result<Vec<i32>, DbErr> {
        let member_role_ids: Vec<i32> = entity::prelude::HeimdallRoleMember::find()
            .select_only()
            .column(entity::heimdall_role_member::Column::RoleId)
            .filter(entity::heimdall_role_member::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if member_role_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::HeimdallRolePermission::find()
            .select_only()
            .column(entity::heimdall_role_permission::Column::RoleId)
            .filter(entity::heimdall_role_permission::Column::Permission.eq(permission))
            .filter(entity::heimdall_role_permission::Column::RoleId.is_in(member_role_ids))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Whether any of the user's roles grants the permission.
    pub async fn user_has_permission(
        &self,
        user_id: i32,
        permission: &str,
    ) -> Result<bool, DbErr> {
        let role_ids = self
            .role_ids_with_permission_for_user(user_id, permission)
            .await?;

        Ok(!role_ids.is_empty())
    }
}
