use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::pizza_dto::{
        AssignOwnerPayload, CategoryResponse, CreateCategoryPayload, CreatePizzaPayload,
        PizzaResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/pizzas/categories",
    responses(
        (status = 200, description = "Category titles in byte order", body = [String])
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let titles = state.category_service.list_titles().await?;
    Ok(Json(titles))
}

#[utoipa::path(
    post,
    path = "/pizzas/categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Empty or duplicate title")
    )
)]
#[axum::debug_handler]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let category = state.category_service.create(&payload.title).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

#[utoipa::path(
    post,
    path = "/pizzas",
    request_body = CreatePizzaPayload,
    responses(
        (status = 201, description = "Pizza created", body = PizzaResponse),
        (status = 400, description = "Invalid payload or unknown user/category")
    )
)]
#[axum::debug_handler]
pub async fn create_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreatePizzaPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let pizza = state.pizza_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(PizzaResponse::from(pizza))))
}

#[utoipa::path(
    get,
    path = "/pizzas/{id}",
    params(
        ("id" = Uuid, Path, description = "Pizza ID")
    ),
    responses(
        (status = 200, description = "Pizza found", body = PizzaResponse),
        (status = 404, description = "Pizza not found")
    )
)]
#[axum::debug_handler]
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let pizza = state.pizza_service.get_by_id(id).await?;
    Ok(Json(PizzaResponse::from(pizza)))
}

#[utoipa::path(
    patch,
    path = "/pizzas/{id}/owner",
    params(
        ("id" = Uuid, Path, description = "Pizza ID")
    ),
    request_body = AssignOwnerPayload,
    responses(
        (status = 200, description = "Owner updated", body = PizzaResponse),
        (status = 400, description = "Unknown user"),
        (status = 404, description = "Pizza not found")
    )
)]
#[axum::debug_handler]
pub async fn assign_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignOwnerPayload>,
) -> Result<impl IntoResponse> {
    let pizza = state.pizza_service.assign_owner(id, payload.user_id).await?;
    Ok(Json(PizzaResponse::from(pizza)))
}
