use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000007_create_heimdall_role_table::HeimdallRole;

static UNIQ_ROLE_PERMISSION_ROLE_PERMISSION: &str =
    "uniq_heimdall_role_permission_role_id_permission";
static FK_ROLE_PERMISSION_ROLE_ID: &str = "fk_heimdall_role_permission_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallRolePermission::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallRolePermission::Id))
                    .col(integer(HeimdallRolePermission::RoleId))
                    .col(string(HeimdallRolePermission::Permission))
                    .col(timestamp(HeimdallRolePermission::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQ_ROLE_PERMISSION_ROLE_PERMISSION)
                    .table(HeimdallRolePermission::Table)
                    .col(HeimdallRolePermission::RoleId)
                    .col(HeimdallRolePermission::Permission)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_PERMISSION_ROLE_ID)
                    .from_tbl(HeimdallRolePermission::Table)
                    .from_col(HeimdallRolePermission::RoleId)
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
                    .name(FK_ROLE_PERMISSION_ROLE_ID)
                    .table(HeimdallRolePermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UNIQ_ROLE_PERMISSION_ROLE_PERMISSION)
                    .table(HeimdallRolePermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(HeimdallRolePermission::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallRolePermission {
    Table,
    Id,
    RoleId,
    Permission,
    CreatedAt,
}
