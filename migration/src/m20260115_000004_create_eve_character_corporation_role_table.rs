use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_create_eve_character_table::EveCharacter;

static IDX_CORPORATION_ROLE_CHARACTER_ID: &str = "idx_eve_character_corporation_role_character_id";
static UNIQ_CORPORATION_ROLE_CHARACTER_ROLE: &str =
    "uniq_eve_character_corporation_role_character_id_role";
static FK_CORPORATION_ROLE_CHARACTER_ID: &str = "fk_eve_character_corporation_role_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacterCorporationRole::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacterCorporationRole::Id))
                    .col(integer(EveCharacterCorporationRole::CharacterId))
                    .col(string(EveCharacterCorporationRole::Role))
                    .col(timestamp(EveCharacterCorporationRole::CreatedAt))
                    .col(timestamp(EveCharacterCorporationRole::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CORPORATION_ROLE_CHARACTER_ID)
                    .table(EveCharacterCorporationRole::Table)
                    .col(EveCharacterCorporationRole::CharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQ_CORPORATION_ROLE_CHARACTER_ROLE)
                    .table(EveCharacterCorporationRole::Table)
                    .col(EveCharacterCorporationRole::CharacterId)
                    .col(EveCharacterCorporationRole::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_ROLE_CHARACTER_ID)
                    .from_tbl(EveCharacterCorporationRole::Table)
                    .from_col(EveCharacterCorporationRole::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
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
                    .name(FK_CORPORATION_ROLE_CHARACTER_ID)
                    .table(EveCharacterCorporationRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UNIQ_CORPORATION_ROLE_CHARACTER_ROLE)
                    .table(EveCharacterCorporationRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CORPORATION_ROLE_CHARACTER_ID)
                    .table(EveCharacterCorporationRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(EveCharacterCorporationRole::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCharacterCorporationRole {
    Table,
    Id,
    CharacterId,
    Role,
    CreatedAt,
    UpdatedAt,
}
