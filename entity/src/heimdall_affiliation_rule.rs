use sea_orm::entity::prelude::*;

/// The id-space an affiliation rule targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EntityKind {
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "corporation")]
    Corporation,
    #[sea_orm(string_value = "alliance")]
    Alliance,
}

/// How a rule contributes to resolution: a direct grant, an everything-except
/// grant, or an exclusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RuleType {
    #[sea_orm(string_value = "allowed")]
    Allowed,
    #[sea_orm(string_value = "inverse")]
    Inverse,
    #[sea_orm(string_value = "forbidden")]
    Forbidden,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heimdall_affiliation_rule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role_id: i32,
    pub affiliatable_id: i64,
    pub affiliatable_kind: EntityKind,
    pub rule_type: RuleType,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
