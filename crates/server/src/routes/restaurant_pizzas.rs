use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use service::restaurant_pizza_service;

use crate::errors::AssociationError;
use crate::routes::pizzas::PizzaOut;
use crate::routes::restaurants::RestaurantSummary;
use crate::routes::AppState;

/// Fields are optional so that absence surfaces as a validation error
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateRestaurantPizzaInput {
    pub price: Option<f64>,
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RestaurantPizzaOut {
    pub id: i32,
    pub price: f64,
    pub pizza: PizzaOut,
    pub restaurant: RestaurantSummary,
}

#[utoipa::path(
    post, path = "/restaurant_pizzas", tag = "restaurant_pizzas",
    request_body = CreateRestaurantPizzaInput,
    responses(
        (status = 201, description = "Created", body = RestaurantPizzaOut),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Restaurant or pizza not found")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaOut>), AssociationError> {
    let Json(input) = payload.map_err(|_| AssociationError::validation("validation errors"))?;
    let (Some(price), Some(pizza_id), Some(restaurant_id)) =
        (input.price, input.pizza_id, input.restaurant_id)
    else {
        return Err(AssociationError::validation("validation errors"));
    };

    let (link, pizza, rest) =
        restaurant_pizza_service::create_restaurant_pizza(&state.db, price, pizza_id, restaurant_id)
            .await?;
    info!(id = link.id, "restaurant pizza created");

    Ok((
        StatusCode::CREATED,
        Json(RestaurantPizzaOut {
            id: link.id,
            price: link.price,
            pizza: pizza.into(),
            restaurant: rest.into(),
        }),
    ))
}
