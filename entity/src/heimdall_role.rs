use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::heimdall_role_permission::Entity")]
    HeimdallRolePermission,
    #[sea_orm(has_many = "super::heimdall_role_member::Entity")]
    HeimdallRoleMember,
    #[sea_orm(has_many = "super::heimdall_affiliation_rule::Entity")]
    HeimdallAffiliationRule,
}

impl Related<super::heimdall_role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallRolePermission.def()
    }
}

impl Related<super::heimdall_role_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallRoleMember.def()
    }
}

impl Related<super::heimdall_affiliation_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallAffiliationRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
