use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        pizza_dto::PizzaResponse,
        user_dto::{CreateUserPayload, UserResponse},
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/users/{id}/pizzas",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Pizzas owned by the user", body = [PizzaResponse]),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn list_user_pizzas(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.user_service.get_by_id(id).await?;
    let pizzas = state.pizza_service.list_by_owner(id).await?;
    let items: Vec<PizzaResponse> = pizzas.into_iter().map(Into::into).collect();
    Ok(Json(items))
}
