use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub main_character_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::MainCharacterId",
        to = "super::eve_character::Column::Id"
    )]
    EveCharacter,
    #[sea_orm(has_many = "super::heimdall_user_character::Entity")]
    HeimdallUserCharacter,
    #[sea_orm(has_many = "super::heimdall_role_member::Entity")]
    HeimdallRoleMember,
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

impl Related<super::heimdall_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallUserCharacter.def()
    }
}

impl Related<super::heimdall_role_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeimdallRoleMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
