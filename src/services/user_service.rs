use crate::dto::user_dto::CreateUserPayload;
use crate::error::Result;
use crate::models::user::User;
use crate::utils::crypto::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        let hashed_password = hash_password(&payload.password)?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (id, username, hashed_password, first_name, last_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, hashed_password, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&payload.username)
        .bind(&hashed_password)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, hashed_password, first_name, last_name, created_at, updated_at
            FROM "user"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
