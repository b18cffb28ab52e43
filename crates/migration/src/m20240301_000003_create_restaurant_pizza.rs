//! Create `restaurant_pizza` table with FKs to `restaurant` and `pizza`.
//!
//! Deleting a restaurant cascades into its menu rows; pizzas are never
//! deleted through the association. Pair uniqueness is checked at the
//! application layer, not here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizza::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantPizza::Id))
                    .col(double(RestaurantPizza::Price).not_null())
                    .col(integer(RestaurantPizza::PizzaId).not_null())
                    .col(integer(RestaurantPizza::RestaurantId).not_null())
                    .col(timestamp_with_time_zone(RestaurantPizza::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizza_pizza")
                            .from(RestaurantPizza::Table, RestaurantPizza::PizzaId)
                            .to(Pizza::Table, Pizza::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizza_restaurant")
                            .from(RestaurantPizza::Table, RestaurantPizza::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RestaurantPizza::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RestaurantPizza { Table, Id, Price, PizzaId, RestaurantId, CreatedAt }

#[derive(DeriveIden)]
enum Pizza { Table, Id }

#[derive(DeriveIden)]
enum Restaurant { Table, Id }
