use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: catalog routes, health, and docs
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let api = Router::new()
        .route("/restaurants", get(restaurants::list))
        .route("/restaurants/:id", get(restaurants::get).delete(restaurants::delete))
        .route("/pizzas", get(pizzas::list))
        .route("/restaurant_pizzas", post(restaurant_pizzas::create))
        .route("/health", get(health))
        .with_state(state);

    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi());

    api.merge(docs)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
