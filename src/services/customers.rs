//! Customers service

use crate::{
    error::{AppError, AppResult},
    models::customer::{CustomerResponse, RegisterCustomer, UpdateCustomer},
    repository::Repository,
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new customer account
    pub async fn register(&self, data: &RegisterCustomer) -> AppResult<CustomerResponse> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be blank".to_string()));
        }
        if data.password.trim().is_empty() {
            return Err(AppError::Validation(
                "Password must not be blank".to_string(),
            ));
        }

        if self.repository.customers.email_exists(&data.email, None).await? {
            return Err(AppError::Conflict(format!(
                "Email already registered: {}",
                data.email
            )));
        }

        let password_hash = hash_password(&data.password)?;
        let customer = self
            .repository
            .customers
            .create(&data.name, &data.email, &password_hash)
            .await?;

        Ok(customer.into())
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<CustomerResponse> {
        let customer = self.repository.customers.get_by_id(id).await?;
        Ok(customer.into())
    }

    /// Update a customer; the password is re-hashed only when a non-blank
    /// value is supplied
    pub async fn update(&self, id: i64, data: &UpdateCustomer) -> AppResult<CustomerResponse> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be blank".to_string()));
        }

        self.repository.customers.get_by_id(id).await?;

        if self
            .repository
            .customers
            .email_exists(&data.email, Some(id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Email already registered: {}",
                data.email
            )));
        }

        let password_hash = match &data.password {
            Some(password) if !password.trim().is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        let customer = self
            .repository
            .customers
            .update(id, &data.name, &data.email, password_hash.as_deref())
            .await?;

        Ok(customer.into())
    }

    /// Delete a customer by ID
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.customers.delete(id).await
    }
}
