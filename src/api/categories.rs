//! Categories API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::category::{CategoryPayload, CategoryResponse},
};

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid category data"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;
    let category = state.services.categories.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories list", body = Vec<CategoryResponse>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state.services.categories.get_all().await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.services.categories.get_by_id(id).await?;
    Ok(Json(category))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<Json<CategoryResponse>> {
    payload.validate()?;
    let category = state.services.categories.update(id, &payload).await?;
    Ok(Json(category))
}

/// Delete a category and all books it owns
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
