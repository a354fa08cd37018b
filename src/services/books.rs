//! Books service

use crate::{
    error::{AppError, AppResult},
    models::book::{BookResponse, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn get_all(&self) -> AppResult<Vec<BookResponse>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookResponse> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book; the category reference must resolve first
    pub async fn create(&self, data: &CreateBook) -> AppResult<BookResponse> {
        if data.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be blank".to_string()));
        }
        if data.author.trim().is_empty() {
            return Err(AppError::Validation("Author must not be blank".to_string()));
        }

        // Resolve the category before writing anything; a missing category
        // fails the whole create with no partial state
        self.repository.categories.get_by_id(data.category_id).await?;

        self.repository.books.create(data).await
    }

    /// Update a book; a supplied category is re-resolved, an omitted one
    /// is retained
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<BookResponse> {
        if data.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be blank".to_string()));
        }
        if data.author.trim().is_empty() {
            return Err(AppError::Validation("Author must not be blank".to_string()));
        }

        self.repository.books.get_by_id(id).await?;

        if let Some(category_id) = data.category_id {
            self.repository.categories.get_by_id(category_id).await?;
        }

        self.repository.books.update(id, data).await
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
