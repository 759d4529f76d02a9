use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000003_create_eve_character_table::EveCharacter,
    m20260115_000005_create_heimdall_user_table::HeimdallUser,
};

static IDX_USER_CHARACTER_USER_ID: &str = "idx_heimdall_user_character_user_id";
static FK_USER_CHARACTER_USER_ID: &str = "fk_heimdall_user_character_user_id";
static FK_USER_CHARACTER_CHARACTER_ID: &str = "fk_heimdall_user_character_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallUserCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallUserCharacter::Id))
                    .col(integer(HeimdallUserCharacter::UserId))
                    .col(integer_uniq(HeimdallUserCharacter::CharacterId))
                    .col(string(HeimdallUserCharacter::OwnerHash))
                    .col(timestamp(HeimdallUserCharacter::CreatedAt))
                    .col(timestamp(HeimdallUserCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .col(HeimdallUserCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CHARACTER_USER_ID)
                    .from_tbl(HeimdallUserCharacter::Table)
                    .from_col(HeimdallUserCharacter::UserId)
                    .to_tbl(HeimdallUser::Table)
                    .to_col(HeimdallUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CHARACTER_CHARACTER_ID)
                    .from_tbl(HeimdallUserCharacter::Table)
                    .from_col(HeimdallUserCharacter::CharacterId)
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
                    .name(FK_USER_CHARACTER_CHARACTER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_CHARACTER_USER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(HeimdallUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeimdallUserCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallUserCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
    OwnerHash,
    CreatedAt,
    UpdatedAt,
}
