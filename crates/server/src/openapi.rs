use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::get,
        crate::routes::restaurants::delete,
        crate::routes::pizzas::list,
        crate::routes::restaurant_pizzas::create,
    ),
    components(
        schemas(
            HealthResponse,
            crate::routes::restaurants::RestaurantSummary,
            crate::routes::restaurants::RestaurantDetail,
            crate::routes::pizzas::PizzaOut,
            crate::routes::restaurant_pizzas::CreateRestaurantPizzaInput,
            crate::routes::restaurant_pizzas::RestaurantPizzaOut,
        )
    ),
    tags(
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas"),
        (name = "health"),
    )
)]
pub struct ApiDoc;
