//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{BookResponse, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with their category name
    pub async fn list(&self) -> AppResult<Vec<BookResponse>> {
        let books = sqlx::query_as::<_, BookResponse>(
            r#"
            SELECT b.id, b.title, b.author, b.publisher, b.publishing_year,
                   c.name AS category_name
            FROM books b
            JOIN categories c ON c.id = b.category_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookResponse> {
        sqlx::query_as::<_, BookResponse>(
            r#"
            SELECT b.id, b.title, b.author, b.publisher, b.publishing_year,
                   c.name AS category_name
            FROM books b
            JOIN categories c ON c.id = b.category_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a new book linked to an existing category
    pub async fn create(&self, data: &CreateBook) -> AppResult<BookResponse> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author, publisher, publishing_year, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.publisher)
        .bind(data.publishing_year)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a book; the category is retained when none is supplied
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<BookResponse> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE books
            SET title = $1, author = $2, publisher = $3, publishing_year = $4,
                category_id = COALESCE($5, category_id)
            WHERE id = $6
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.publisher)
        .bind(data.publishing_year)
        .bind(data.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let id = updated.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        self.get_by_id(id).await
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
