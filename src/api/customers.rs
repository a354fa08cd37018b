//! Customers API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::customer::{CustomerResponse, RegisterCustomer, UpdateCustomer},
};

/// Register a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    security(("bearer_auth" = [])),
    request_body = RegisterCustomer,
    responses(
        (status = 201, description = "Customer registered", body = CustomerResponse),
        (status = 400, description = "Invalid customer data"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_customer(
    State(state): State<crate::AppState>,
    Json(payload): Json<RegisterCustomer>,
) -> AppResult<(StatusCode, Json<CustomerResponse>)> {
    payload.validate()?;
    let customer = state.services.customers.register(&payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CustomerResponse>> {
    let customer = state.services.customers.get_by_id(id).await?;
    Ok(Json(customer))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCustomer>,
) -> AppResult<Json<CustomerResponse>> {
    payload.validate()?;
    let customer = state.services.customers.update(id, &payload).await?;
    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
