use axum::extract::State;
use axum::Json;
use serde::Serialize;

use models::pizza;
use service::pizza_service;

use crate::errors::CatalogError;
use crate::routes::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PizzaOut {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<pizza::Model> for PizzaOut {
    fn from(m: pizza::Model) -> Self {
        Self { id: m.id, name: m.name, ingredients: m.ingredients }
    }
}

#[utoipa::path(
    get, path = "/pizzas", tag = "pizzas",
    responses((status = 200, description = "All pizzas", body = Vec<PizzaOut>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PizzaOut>>, CatalogError> {
    let rows = pizza_service::list_pizzas(&state.db).await?;
    Ok(Json(rows.into_iter().map(PizzaOut::from).collect()))
}
