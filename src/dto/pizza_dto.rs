use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::pizza::{Pizza, PizzaCategory};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryPayload {
    #[validate(length(min = 1))]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub title: String,
}

impl From<PizzaCategory> for CategoryResponse {
    fn from(category: PizzaCategory) -> Self {
        Self {
            id: category.id,
            title: category.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePizzaPayload {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

/// `{"user_id": null}` clears the owner.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignOwnerPayload {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PizzaResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            title: pizza.title,
            description: pizza.description,
            price: pizza.price,
            category_id: pizza.category_id,
            user_id: pizza.user_id,
            created_at: pizza.created_at,
            updated_at: pizza.updated_at,
        }
    }
}
