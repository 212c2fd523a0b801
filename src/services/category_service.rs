use crate::error::{unique_violation, Result};
use crate::models::pizza::PizzaCategory;
use sqlx::{PgExecutor, PgPool};

/// Every category title, in byte order (`"BBQ" < "Veg" < "meat"`) regardless
/// of the database's default collation.
pub async fn pizza_categories<'e, E>(executor: E) -> Result<Vec<String>>
where
    E: PgExecutor<'e>,
{
    let titles = sqlx::query_scalar::<_, String>(
        r#"
        SELECT title FROM pizza_category
        ORDER BY title COLLATE "C"
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(titles)
}

#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_titles(&self) -> Result<Vec<String>> {
        pizza_categories(&self.pool).await
    }

    pub async fn create(&self, title: &str) -> Result<PizzaCategory> {
        let category = sqlx::query_as::<_, PizzaCategory>(
            r#"
            INSERT INTO pizza_category (title)
            VALUES ($1)
            RETURNING id, title
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation(e, "Category already exists"))?;

        Ok(category)
    }
}
