use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_create_eve_character_table::EveCharacter;

static FK_HEIMDALL_USER_MAIN_CHARACTER_ID: &str = "fk_heimdall_user_main_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallUser::Id))
                    .col(integer(HeimdallUser::MainCharacterId))
                    .col(timestamp(HeimdallUser::CreatedAt))
                    .col(timestamp(HeimdallUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HEIMDALL_USER_MAIN_CHARACTER_ID)
                    .from_tbl(HeimdallUser::Table)
                    .from_col(HeimdallUser::MainCharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_HEIMDALL_USER_MAIN_CHARACTER_ID)
                    .table(HeimdallUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallUser {
    Table,
    Id,
    MainCharacterId,
    CreatedAt,
    UpdatedAt,
}
