//! Categories service

use crate::{
    error::{AppError, AppResult},
    models::category::{CategoryPayload, CategoryResponse},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all categories
    pub async fn get_all(&self) -> AppResult<Vec<CategoryResponse>> {
        self.repository.categories.list().await
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<CategoryResponse> {
        self.repository.categories.get_by_id(id).await
    }

    /// Create a category; name uniqueness is enforced by the database
    /// constraint and surfaces as a 409 conflict
    pub async fn create(&self, data: &CategoryPayload) -> AppResult<CategoryResponse> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be blank".to_string()));
        }
        self.repository.categories.create(data).await
    }

    /// Update a category's name and description
    pub async fn update(&self, id: i64, data: &CategoryPayload) -> AppResult<CategoryResponse> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be blank".to_string()));
        }
        self.repository.categories.get_by_id(id).await?;
        self.repository.categories.update(id, data).await
    }

    /// Delete a category and, through the cascade, all books it owns
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.categories.delete(id).await
    }
}
