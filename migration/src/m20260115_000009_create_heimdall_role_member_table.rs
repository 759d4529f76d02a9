use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000005_create_heimdall_user_table::HeimdallUser,
    m20260115_000007_create_heimdall_role_table::HeimdallRole,
};

static IDX_ROLE_MEMBER_USER_ID: &str = "idx_heimdall_role_member_user_id";
static UNIQ_ROLE_MEMBER_ROLE_USER: &str = "uniq_heimdall_role_member_role_id_user_id";
static FK_ROLE_MEMBER_ROLE_ID: &str = "fk_heimdall_role_member_role_id";
static FK_ROLE_MEMBER_USER_ID: &str = "fk_heimdall_role_member_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallRoleMember::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallRoleMember::Id))
                    .col(integer(HeimdallRoleMember::RoleId))
                    .col(integer(HeimdallRoleMember::UserId))
                    .col(timestamp(HeimdallRoleMember::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROLE_MEMBER_USER_ID)
                    .table(HeimdallRoleMember::Table)
                    .col(HeimdallRoleMember::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQ_ROLE_MEMBER_ROLE_USER)
                    .table(HeimdallRoleMember::Table)
                    .col(HeimdallRoleMember::RoleId)
                    .col(HeimdallRoleMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_MEMBER_ROLE_ID)
                    .from_tbl(HeimdallRoleMember::Table)
                    .from_col(HeimdallRoleMember::RoleId)
                    .to_tbl(HeimdallRole::Table)
                    .to_col(HeimdallRole::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_MEMBER_USER_ID)
                    .from_tbl(HeimdallRoleMember::Table)
                    .from_col(HeimdallRoleMember::UserId)
                    .to_tbl(HeimdallUser::Table)
                    .to_col(HeimdallUser::Id)
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
                    .name(FK_ROLE_MEMBER_USER_ID)
                    .table(HeimdallRoleMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROLE_MEMBER_ROLE_ID)
                    .table(HeimdallRoleMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UNIQ_ROLE_MEMBER_ROLE_USER)
                    .table(HeimdallRoleMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROLE_MEMBER_USER_ID)
                    .table(HeimdallRoleMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallRoleMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallRoleMember {
    Table,
    Id,
    RoleId,
    UserId,
    CreatedAt,
}
