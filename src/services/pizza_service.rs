use crate::dto::pizza_dto::CreatePizzaPayload;
use crate::error::{foreign_key_violation, Error, Result};
use crate::models::pizza::Pizza;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const PIZZA_COLUMNS: &str =
    "id, title, description, price, category_id, user_id, created_at, updated_at";

#[derive(Clone)]
pub struct PizzaService {
    pool: PgPool,
}

impl PizzaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreatePizzaPayload) -> Result<Pizza> {
        if payload.price < Decimal::ZERO {
            return Err(Error::BadRequest("Price must not be negative".to_string()));
        }

        let pizza = sqlx::query_as::<_, Pizza>(&format!(
            r#"
            INSERT INTO pizza (title, description, price, category_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            PIZZA_COLUMNS
        ))
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.category_id)
        .bind(payload.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| foreign_key_violation(e, "Unknown user or category"))?;

        Ok(pizza)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Pizza> {
        let pizza = sqlx::query_as::<_, Pizza>(&format!(
            "SELECT {} FROM pizza WHERE id = $1",
            PIZZA_COLUMNS
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(pizza)
    }

    /// Sets or clears the owning user.
    pub async fn assign_owner(&self, id: Uuid, user_id: Option<Uuid>) -> Result<Pizza> {
        let pizza = sqlx::query_as::<_, Pizza>(&format!(
            r#"
            UPDATE pizza
            SET user_id = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PIZZA_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| foreign_key_violation(e, "Unknown user"))?;

        Ok(pizza)
    }

    pub async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Pizza>> {
        let pizzas = sqlx::query_as::<_, Pizza>(&format!(
            r#"
            SELECT {} FROM pizza
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
            PIZZA_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pizzas)
    }
}
