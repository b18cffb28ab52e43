use models::{pizza, restaurant, restaurant_pizza};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use tracing::info;

use crate::errors::ServiceError;

/// All restaurants in natural storage order.
pub async fn list_restaurants(db: &DatabaseConnection) -> Result<Vec<restaurant::Model>, ServiceError> {
    restaurant::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// One restaurant plus the distinct set of pizzas linked through its
/// association rows.
pub async fn get_restaurant_with_pizzas(
    db: &DatabaseConnection,
    id: i32,
) -> Result<(restaurant::Model, Vec<pizza::Model>), ServiceError> {
    let rest = restaurant::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Restaurant"))?;

    let pizzas = rest
        .find_related(pizza::Entity)
        .distinct()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    Ok((rest, pizzas))
}

/// Delete a restaurant and its association rows in one transaction.
/// Pizza rows stay, even when they lose their last restaurant.
pub async fn delete_restaurant(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let rest = restaurant::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Restaurant"))?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    restaurant_pizza::Entity::delete_many()
        .filter(restaurant_pizza::Column::RestaurantId.eq(rest.id))
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    restaurant::Entity::delete_by_id(rest.id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    info!(id, name = %rest.name, "deleted restaurant and its menu");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed, test_support::get_db};
    use crate::errors::ServiceError;

    #[tokio::test]
    async fn lists_seeded_restaurants() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;

        let all = list_restaurants(&db).await?;
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|r| r.name == "Pizza Lovers"));
        assert!(all.iter().any(|r| r.name == "Pizza World"));
        Ok(())
    }

    #[tokio::test]
    async fn restaurant_detail_includes_linked_pizzas() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;

        let lovers = list_restaurants(&db)
            .await?
            .into_iter()
            .find(|r| r.name == "Pizza Lovers")
            .expect("seeded");
        let (rest, pizzas) = get_restaurant_with_pizzas(&db, lovers.id).await?;
        assert_eq!(rest.id, lovers.id);
        assert_eq!(rest.address, "789 Elm Street");
        assert_eq!(pizzas.len(), 1);
        assert_eq!(pizzas[0].name, "Margherita");
        Ok(())
    }

    #[tokio::test]
    async fn missing_restaurant_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;

        let err = get_restaurant_with_pizzas(&db, 999_999).await.unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert_eq!(msg, "Restaurant not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }

        let err = delete_restaurant(&db, 999_999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_menu_but_keeps_pizzas() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;

        let lovers = list_restaurants(&db)
            .await?
            .into_iter()
            .find(|r| r.name == "Pizza Lovers")
            .expect("seeded");

        delete_restaurant(&db, lovers.id).await?;

        let err = get_restaurant_with_pizzas(&db, lovers.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let leftover = restaurant_pizza::Entity::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(lovers.id))
            .all(&db)
            .await?;
        assert!(leftover.is_empty());

        // Pizzas keep their independent lifecycle
        let pizzas = pizza::Entity::find().all(&db).await?;
        assert_eq!(pizzas.len(), 2);
        Ok(())
    }
}
