//! Create `pizza` table.
//!
//! Pizzas live independently of restaurants; nothing cascades into them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizza::Table)
                    .if_not_exists()
                    .col(pk_auto(Pizza::Id))
                    .col(string_len(Pizza::Name, 128).not_null())
                    .col(text(Pizza::Ingredients).not_null())
                    .col(timestamp_with_time_zone(Pizza::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pizza::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pizza { Table, Id, Name, Ingredients, CreatedAt }
