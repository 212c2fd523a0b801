use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use utoipa::OpenApi;

use crate::{
    config::AppConfig,
    dto::{
        pizza_dto::{
            AssignOwnerPayload, CategoryResponse, CreateCategoryPayload, CreatePizzaPayload,
            PizzaResponse,
        },
        user_dto::{CreateUserPayload, UserResponse},
    },
    routes::{health, pizza, user},
    AppState,
};

/// Routes mounted at the root.
#[derive(OpenApi)]
#[openapi(paths(health::health))]
pub struct ApiDoc;

/// Routes mounted under `api_v1_prefix`. Paths are relative to the prefix.
#[derive(OpenApi)]
#[openapi(
    paths(
        pizza::list_categories,
        pizza::create_category,
        pizza::create_pizza,
        pizza::get_pizza,
        pizza::assign_owner,
        user::create_user,
        user::get_user,
        user::list_user_pizzas,
    ),
    components(schemas(
        CreateCategoryPayload,
        CategoryResponse,
        CreatePizzaPayload,
        AssignOwnerPayload,
        PizzaResponse,
        CreateUserPayload,
        UserResponse,
    ))
)]
pub struct ApiV1Doc;

pub fn openapi_json_url(config: &AppConfig) -> String {
    format!("{}/openapi.json", config.docs_url.trim_end_matches('/'))
}

/// The full document with v1 paths under the configured prefix.
pub fn api_doc(config: &AppConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = config.app_title.clone();
    doc.info.version = config.version.clone();

    let v1 = ApiV1Doc::openapi();
    let prefix = config.api_v1_prefix.trim_end_matches('/');
    for (path, item) in v1.paths.paths {
        doc.paths.paths.insert(format!("{}{}", prefix, path), item);
    }
    doc.components = v1.components;
    doc
}

pub async fn openapi(State(state): State<AppState>) -> impl IntoResponse {
    Json(api_doc(&state.config))
}

pub async fn redoc(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title} - ReDoc</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body>
    <redoc spec-url="{spec_url}"></redoc>
    <script src="https://cdn.jsdelivr.net/npm/redoc@next/bundles/redoc.standalone.js"></script>
  </body>
</html>
"#,
        title = state.config.app_title,
        spec_url = openapi_json_url(&state.config),
    ))
}
