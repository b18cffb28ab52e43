//! Create `restaurant` table.
//!
//! Restaurant names are unique across the catalog.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(string_len(Restaurant::Name, 128).unique_key().not_null())
                    .col(string_len(Restaurant::Address, 255).not_null())
                    .col(timestamp_with_time_zone(Restaurant::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurant { Table, Id, Name, Address, CreatedAt }
