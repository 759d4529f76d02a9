use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeimdallRole::Table)
                    .if_not_exists()
                    .col(pk_auto(HeimdallRole::Id))
                    .col(string_uniq(HeimdallRole::Name))
                    .col(timestamp(HeimdallRole::CreatedAt))
                    .col(timestamp(HeimdallRole::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeimdallRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HeimdallRole {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
