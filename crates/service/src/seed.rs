use models::{pizza, restaurant, restaurant_pizza};
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::info;

use crate::errors::ServiceError;

/// Reset the catalog to its canonical demo content: two restaurants, two
/// pizzas, one menu entry each. Destructive; association rows go first so
/// the pizza FK never blocks the wipe.
pub async fn seed_data(db: &DatabaseConnection) -> Result<(), ServiceError> {
    restaurant_pizza::Entity::delete_many()
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    pizza::Entity::delete_many()
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    restaurant::Entity::delete_many()
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let pizza_lovers = restaurant::create(db, "Pizza Lovers", "789 Elm Street").await?;
    let pizza_world = restaurant::create(db, "Pizza World", "321 Maple Avenue").await?;

    let margherita = pizza::create(db, "Margherita", "Dough, Tomato Sauce, Mozzarella, Basil").await?;
    let veggie_supreme = pizza::create(
        db,
        "Veggie Supreme",
        "Dough, Tomato Sauce, Mozzarella, Bell Peppers, Onions, Mushrooms, Olives",
    )
    .await?;

    restaurant_pizza::create(db, 15.0, margherita.id, pizza_lovers.id).await?;
    restaurant_pizza::create(db, 18.0, veggie_supreme.id, pizza_world.id).await?;

    info!("seeded catalog with 2 restaurants, 2 pizzas, 2 menu entries");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn seed_populates_canonical_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_data(&db).await?;

        assert_eq!(restaurant::Entity::find().count(&db).await?, 2);
        assert_eq!(pizza::Entity::find().count(&db).await?, 2);
        assert_eq!(restaurant_pizza::Entity::find().count(&db).await?, 2);

        let links = restaurant_pizza::Entity::find().all(&db).await?;
        let mut prices: Vec<f64> = links.iter().map(|l| l.price).collect();
        prices.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(prices, vec![15.0, 18.0]);
        Ok(())
    }

    #[tokio::test]
    async fn reseeding_replaces_rather_than_accumulates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_data(&db).await?;
        seed_data(&db).await?;

        assert_eq!(restaurant::Entity::find().count(&db).await?, 2);
        assert_eq!(pizza::Entity::find().count(&db).await?, 2);
        assert_eq!(restaurant_pizza::Entity::find().count(&db).await?, 2);
        Ok(())
    }
}
