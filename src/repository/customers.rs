//! Customers repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::customer::Customer,
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    /// Get customer by email; the match is case-sensitive, exactly as stored
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(customer)
    }

    /// Check if email is already registered
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND id != $2)")
                .bind(email)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a new customer with an already-hashed password
    pub async fn create(&self, name: &str, email: &str, password_hash: &str) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, email, password) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }

    /// Update a customer; the stored hash is kept when no new one is supplied
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $1, email = $2, password = COALESCE($3, password)
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    /// Delete a customer by ID
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Customer {} not found", id)));
        }
        Ok(())
    }
}
