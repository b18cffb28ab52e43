use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite with the schema applied. `connect_to` pins the
/// pool to a single connection so every query sees the same memory db.
pub async fn get_db() -> Result<DatabaseConnection> {
    let db = models::db::connect_to("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
