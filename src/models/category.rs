//! Category model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Category representation returned by the API.
///
/// `book_count` is computed from the current books relation at read time.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub book_count: i64,
}

/// Create or update category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryPayload {
    /// Category name, unique across all categories
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    pub description: Option<String>,
}
