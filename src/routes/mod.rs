pub mod docs;
pub mod health;
pub mod pizza;
pub mod user;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::cors_layer, AppState};

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let api_v1 = Router::new()
        .route(
            "/pizzas/categories",
            get(pizza::list_categories).post(pizza::create_category),
        )
        .route("/pizzas", post(pizza::create_pizza))
        .route("/pizzas/:id", get(pizza::get_pizza))
        .route("/pizzas/:id/owner", patch(pizza::assign_owner))
        .route("/users", post(user::create_user))
        .route("/users/:id", get(user::get_user))
        .route("/users/:id/pizzas", get(user::list_user_pizzas));

    let router = Router::new()
        .route("/health", get(health::health))
        .route(&docs::openapi_json_url(&config), get(docs::openapi))
        .route(&config.redoc_url, get(docs::redoc));
    let router = match config.api_v1_prefix.trim_end_matches('/') {
        "" => router.merge(api_v1),
        prefix => router.nest(prefix, api_v1),
    };

    router
        .with_state(state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
