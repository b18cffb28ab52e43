use models::{pizza, restaurant, restaurant_pizza};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::info;

use crate::errors::ServiceError;

/// Price bounds for a menu entry, inclusive.
const PRICE_MIN: f64 = 1.0;
const PRICE_MAX: f64 = 30.0;

/// Create an association after validating price, both endpoints, and pair
/// uniqueness. Nothing is written until every check has passed. Returns the
/// new row together with the pizza and restaurant it links.
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    price: f64,
    pizza_id: i32,
    restaurant_id: i32,
) -> Result<(restaurant_pizza::Model, pizza::Model, restaurant::Model), ServiceError> {
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(ServiceError::Validation("Price must be between 1 and 30".into()));
    }

    let rest = restaurant::Entity::find_by_id(restaurant_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Restaurant"))?;
    let pizza = pizza::Entity::find_by_id(pizza_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Pizza"))?;

    // At most one association per (pizza, restaurant) pair
    let existing = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::PizzaId.eq(pizza.id))
        .filter(restaurant_pizza::Column::RestaurantId.eq(rest.id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::Validation("Restaurant pizza already exists".into()));
    }

    let created = restaurant_pizza::create(db, price, pizza.id, rest.id).await?;
    info!(
        id = created.id,
        restaurant_id = rest.id,
        pizza_id = pizza.id,
        price,
        "created restaurant pizza"
    );
    Ok((created, pizza, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed, test_support::get_db};

    async fn seeded_ids(db: &DatabaseConnection) -> Result<(i32, i32, i32, i32), anyhow::Error> {
        let lovers = restaurant::Entity::find()
            .filter(restaurant::Column::Name.eq("Pizza Lovers"))
            .one(db)
            .await?
            .expect("seeded");
        let world = restaurant::Entity::find()
            .filter(restaurant::Column::Name.eq("Pizza World"))
            .one(db)
            .await?
            .expect("seeded");
        let margherita = pizza::Entity::find()
            .filter(pizza::Column::Name.eq("Margherita"))
            .one(db)
            .await?
            .expect("seeded");
        let veggie = pizza::Entity::find()
            .filter(pizza::Column::Name.eq("Veggie Supreme"))
            .one(db)
            .await?
            .expect("seeded");
        Ok((lovers.id, world.id, margherita.id, veggie.id))
    }

    #[tokio::test]
    async fn rejects_out_of_range_price() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;
        let (_, world, margherita, _) = seeded_ids(&db).await?;

        for bad in [0.0, 0.99, 30.01, 31.0, -5.0] {
            let err = create_restaurant_pizza(&db, bad, margherita, world).await.unwrap_err();
            match err {
                ServiceError::Validation(msg) => assert_eq!(msg, "Price must be between 1 and 30"),
                other => panic!("expected Validation, got {other:?}"),
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn accepts_boundary_prices() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;
        let (lovers, world, margherita, veggie) = seeded_ids(&db).await?;

        // The seeded pairs are (lovers, margherita) and (world, veggie);
        // the two cross pairs are free
        let (low, _, _) = create_restaurant_pizza(&db, 1.0, margherita, world).await?;
        assert_eq!(low.price, 1.0);
        let (high, _, _) = create_restaurant_pizza(&db, 30.0, veggie, lovers).await?;
        assert_eq!(high.price, 30.0);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_restaurant_then_pizza() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;
        let (lovers, _, margherita, _) = seeded_ids(&db).await?;

        let err = create_restaurant_pizza(&db, 10.0, margherita, 999_999).await.unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert_eq!(msg, "Restaurant not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }

        let err = create_restaurant_pizza(&db, 10.0, 999_999, lovers).await.unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert_eq!(msg, "Pizza not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_pair() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;
        let (_, world, margherita, _) = seeded_ids(&db).await?;

        let (first, _, _) = create_restaurant_pizza(&db, 12.0, margherita, world).await?;
        assert!(first.id > 0);

        let err = create_restaurant_pizza(&db, 14.0, margherita, world).await.unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert_eq!(msg, "Restaurant pizza already exists"),
            other => panic!("expected Validation, got {other:?}"),
        }

        // The duplicate attempt wrote nothing
        let rows = restaurant_pizza::Entity::find()
            .filter(restaurant_pizza::Column::PizzaId.eq(margherita))
            .filter(restaurant_pizza::Column::RestaurantId.eq(world))
            .all(&db)
            .await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price, 12.0);
        Ok(())
    }

    #[tokio::test]
    async fn same_pizza_allowed_at_different_restaurants() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed::seed_data(&db).await?;
        let (_, world, margherita, _) = seeded_ids(&db).await?;

        // (Pizza Lovers, Margherita) exists from seeding; the same pizza at
        // the other restaurant is a distinct pair
        let (created, p, r) = create_restaurant_pizza(&db, 16.5, margherita, world).await?;
        assert_eq!(p.id, margherita);
        assert_eq!(r.id, world);
        assert_eq!(created.pizza_id, margherita);
        assert_eq!(created.restaurant_id, world);
        Ok(())
    }
}
