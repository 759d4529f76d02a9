use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000007_create_heimdall_role_table::HeimdallRole;

static IDX_AFFILIATION_RULE_ROLE_ID: &str = "idx_heimdall_affiliation_rule_role_id";
static FK_AFFILIATION_RULE_ROLE_ID: &str = "fk_heimdall_affiliation_rule_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallAffiliationRule::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallAffiliationRule::Id))
                    .col(integer(HeimdallAffiliationRule::RoleId))
                    .col(big_integer(HeimdallAffiliationRule::AffiliatableId))
                    .col(string_len(HeimdallAffiliationRule::AffiliatableKind, 16))
                    .col(string_len(HeimdallAffiliationRule::RuleType, 16))
                    .col(timestamp(HeimdallAffiliationRule::CreatedAt))
                    .col(timestamp(HeimdallAffiliationRule::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AFFILIATION_RULE_ROLE_ID)
                    .table(HeimdallAffiliationRule::Table)
                    .col(HeimdallAffiliationRule::RoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AFFILIATION_RULE_ROLE_ID)
                    .from_tbl(HeimdallAffiliationRule::Table)
                    .from_col(HeimdallAffiliationRule::RoleId)
                    .to_tbl(HeimdallRole::Table)
                    .to_col(HeimdallRole::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AFFILIATION_RULE_ROLE_ID)
                    .table(HeimdallAffiliationRule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AFFILIATION_RULE_ROLE_ID)
                    .table(HeimdallAffiliationRule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(HeimdallAffiliationRule::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallAffiliationRule {
    Table,
    Id,
    RoleId,
    AffiliatableId,
    AffiliatableKind,
    RuleType,
    CreatedAt,
    UpdatedAt,
}
