use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_role_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role_id: i32,
    pub user_id: i32,
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
    #[sea_orm(
        belongs_to = "super::heimdall_user::Entity",
        from = "Column::UserId",
        to = "super::heimdall_user::Column::Id"
    )]
    HeimdallUser,
}

impl Related<super::heimdall_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallRole.def()
    }
}

impl Related<super::heimdall_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
