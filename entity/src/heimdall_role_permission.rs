use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_role_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role_id: i32,
    pub permission: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::heimdall_role::Entity",
        from = "Column::RoleId",
        to = "super::heimdall_role::Column::Id"
    )]
    HeimdallRole,
}

impl Related<super::heimdall_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
