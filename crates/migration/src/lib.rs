//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_restaurant;
mod m20240301_000002_create_pizza;
mod m20240301_000003_create_restaurant_pizza;
mod m20240301_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_restaurant::Migration),
            Box::new(m20240301_000002_create_pizza::Migration),
            Box::new(m20240301_000003_create_restaurant_pizza::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000004_add_indexes::Migration),
        ]
    }
}
