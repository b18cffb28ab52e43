use models::pizza;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;

/// All pizzas in natural storage order.
pub async fn list_pizzas(db: &DatabaseConnection) -> Result<Vec<pizza::Model>, ServiceError> {
    pizza::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed, test_support::get_db};

    #[tokio::test]
    async fn lists_seeded_pizzas() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;

        let pizzas = list_pizzas(&db).await?;
        assert_eq!(pizzas.len(), 2);
        assert!(pizzas.iter().any(|p| p.name == "Margherita"));
        assert!(pizzas.iter().all(|p| !p.ingredients.is_empty()));
        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(list_pizzas(&db).await?.is_empty());
        Ok(())
    }
}
