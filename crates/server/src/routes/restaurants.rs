use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use models::restaurant;
use service::restaurant_service;

use crate::errors::CatalogError;
use crate::routes::pizzas::PizzaOut;
use crate::routes::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<restaurant::Model> for RestaurantSummary {
    fn from(m: restaurant::Model) -> Self {
        Self { id: m.id, name: m.name, address: m.address }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub pizzas: Vec<PizzaOut>,
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    responses((status = 200, description = "All restaurants", body = Vec<RestaurantSummary>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RestaurantSummary>>, CatalogError> {
    let rows = restaurant_service::list_restaurants(&state.db).await?;
    Ok(Json(rows.into_iter().map(RestaurantSummary::from).collect()))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantDetail>, CatalogError> {
    let (rest, pizzas) = restaurant_service::get_restaurant_with_pizzas(&state.db, id).await?;
    Ok(Json(RestaurantDetail {
        id: rest.id,
        name: rest.name,
        address: rest.address,
        pizzas: pizzas.into_iter().map(PizzaOut::from).collect(),
    }))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, CatalogError> {
    restaurant_service::delete_restaurant(&state.db, id).await?;
    info!(id, "restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}
