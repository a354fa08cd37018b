//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book representation returned by the API.
///
/// `category_name` is projected from the owning category at read time,
/// never stored on the book row.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub publishing_year: i32,
    pub category_name: String,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be blank"))]
    pub author: String,
    pub publisher: Option<String>,
    #[serde(default)]
    pub publishing_year: i32,
    /// Owning category; must reference an existing category
    pub category_id: i64,
}

/// Update book request
///
/// Title, author, publisher, and year always overwrite the stored values.
/// The category is reassigned only when `category_id` is supplied.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be blank"))]
    pub author: String,
    pub publisher: Option<String>,
    #[serde(default)]
    pub publishing_year: i32,
    pub category_id: Option<i64>,
}
