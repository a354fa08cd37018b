//! Categories repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::{CategoryPayload, CategoryResponse},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all categories with their book count
    pub async fn list(&self) -> AppResult<Vec<CategoryResponse>> {
        let categories = sqlx::query_as::<_, CategoryResponse>(
            r#"
            SELECT c.id, c.name, c.description, COUNT(b.id) AS book_count
            FROM categories c
            LEFT JOIN books b ON b.category_id = c.id
            GROUP BY c.id
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<CategoryResponse> {
        sqlx::query_as::<_, CategoryResponse>(
            r#"
            SELECT c.id, c.name, c.description, COUNT(b.id) AS book_count
            FROM categories c
            LEFT JOIN books b ON b.category_id = c.id
            WHERE c.id = $1
            GROUP BY c.id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Create a new category; a duplicate name violates the unique
    /// constraint and surfaces as a conflict
    pub async fn create(&self, data: &CategoryPayload) -> AppResult<CategoryResponse> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a category's name and description
    pub async fn update(&self, id: i64, data: &CategoryPayload) -> AppResult<CategoryResponse> {
        let updated: Option<i64> = sqlx::query_scalar(
            "UPDATE categories SET name = $1, description = $2 WHERE id = $3 RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let id = updated.ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
        self.get_by_id(id).await
    }

    /// Delete a category; owned books are removed by the cascade on
    /// books.category_id
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
