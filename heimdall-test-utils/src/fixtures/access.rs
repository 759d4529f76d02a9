use chrono::Utc;
use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AffiliationRuleModel, RoleMemberModel, RoleModel, RolePermissionModel},
    TestSetup,
};

impl TestSetup {
    pub fn access(&self) -> AccessFixtures<'_> {
        AccessFixtures { setup: self }
    }
}

pub struct AccessFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> AccessFixtures<'a> {
    pub async fn insert_role(&self, name: &str) -> Result<RoleModel, TestError> {
        Ok(
            entity::prelude::HeimdallRole::insert(entity::heimdall_role::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn grant_permission(
        &self,
        role_id: i32,
        permission: &str,
    ) -> Result<RolePermissionModel, TestError> {
        Ok(entity::prelude::HeimdallRolePermission::insert(
            entity::heimdall_role_permission::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                permission: ActiveValue::Set(permission.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn add_member(&self, role_id: i32, user_id: i32) -> Result<RoleMemberModel, TestError> {
        Ok(entity::prelude::HeimdallRoleMember::insert(
            entity::heimdall_role_member::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_affiliation_rule(
        &self,
        role_id: i32,
        affiliatable_id: i64,
        affiliatable_kind: EntityKind,
        rule_type: RuleType,
    ) -> Result<AffiliationRuleModel, TestError> {
        Ok(entity::prelude::HeimdallAffiliationRule::insert(
            entity::heimdall_affiliation_rule::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                affiliatable_id: ActiveValue::Set(affiliatable_id),
                affiliatable_kind: ActiveValue::Set(affiliatable_kind),
                rule_type: ActiveValue::Set(rule_type),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a role granting `permission` with `user_id` as a member, the
    /// most common starting point for resolution tests.
    pub async fn insert_role_with_permission(
        &self,
        name: &str,
        permission: &str,
        user_id: i32,
    ) -> Result<RoleModel, TestError> {
        let role = self.insert_role(name).await?;
        self.grant_permission(role.id, permission).await?;
        self.add_member(role.id, user_id).await?;

        Ok(role)
    }
}
