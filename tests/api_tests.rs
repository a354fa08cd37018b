//! API integration tests
//!
//! These tests run against a live server started with the default
//! configuration. Run with: cargo test -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde_json::{json, Value};

use libris_server::models::customer::TokenClaims;

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-this-secret-in-production".to_string())
}

/// Mint a bearer token directly with the server's signing secret,
/// so protected endpoints can be exercised without a pre-seeded account
fn bearer_token(subject: &str) -> String {
    let token = TokenClaims::new(subject, 3600)
        .create_token(&jwt_secret())
        .expect("Failed to create token");
    format!("Bearer {}", token)
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos()
}

fn unique_email(tag: &str) -> String {
    format!("{}.{}@example.com", tag, unique_suffix())
}

async fn register_customer(client: &Client, email: &str, password: &str) -> Value {
    let response = client
        .post(format!("{}/customers", BASE_URL))
        .header("Authorization", bearer_token("fixtures@example.com"))
        .json(&json!({
            "name": "Test Customer",
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse register response")
}

async fn create_category(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", bearer_token("fixtures@example.com"))
        .json(&json!({ "name": name, "description": "test category" }))
        .send()
        .await
        .expect("Failed to send create category request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse category response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login_roundtrip() {
    let client = Client::new();
    let email = unique_email("login");

    register_customer(&client, &email, "secret1").await;

    // Correct credentials yield a verifiable token for this email
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse login response");
    let token = body["token"].as_str().expect("No token in response");
    assert!(!token.is_empty());

    let claims = TokenClaims::from_token(token, &jwt_secret()).expect("Token does not verify");
    assert_eq!(claims.sub, email);

    // Wrong password and unknown email fail identically
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 401);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": unique_email("unknown"), "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_email_conflict() {
    let client = Client::new();
    let email = unique_email("duplicate");

    let first = register_customer(&client, &email, "secret1").await;

    let response = client
        .post(format!("{}/customers", BASE_URL))
        .header("Authorization", bearer_token("fixtures@example.com"))
        .json(&json!({
            "name": "Other Customer",
            "email": email,
            "password": "secret2"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 409);

    // First registration is unaffected
    let response = client
        .get(format!("{}/customers/{}", BASE_URL, first["id"]))
        .header("Authorization", bearer_token("fixtures@example.com"))
        .send()
        .await
        .expect("Failed to send get request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_list_books_is_public() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_write_is_rejected_without_state_change() {
    let client = Client::new();

    let before: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to list books")
        .json()
        .await
        .expect("Failed to parse books");
    let count_before = before.as_array().expect("Not an array").len();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Unauthorized Book",
            "author": "Anonymous",
            "publishingYear": 2024,
            "categoryId": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);

    let after: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to list books")
        .json()
        .await
        .expect("Failed to parse books");
    assert_eq!(count_before, after.as_array().expect("Not an array").len());
}

#[tokio::test]
#[ignore]
async fn test_book_category_lifecycle() {
    let client = Client::new();
    let auth = bearer_token("fixtures@example.com");
    let category_name = format!("SciFi-{}", unique_suffix());

    let category = create_category(&client, &category_name).await;
    assert_eq!(category["bookCount"], 0);
    let category_id = category["id"].as_i64().expect("No category ID");

    // Creating a book against a missing category persists nothing
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", &auth)
        .json(&json!({
            "title": "Orphan",
            "author": "Nobody",
            "categoryId": 999999999i64
        }))
        .send()
        .await
        .expect("Failed to send create book request");
    assert_eq!(response.status(), 404);

    // Valid create projects the category name into the response
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", &auth)
        .json(&json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "publisher": "Chilton Books",
            "publishingYear": 1965,
            "categoryId": category_id
        }))
        .send()
        .await
        .expect("Failed to send create book request");

    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse book response");
    assert_eq!(book["categoryName"], category_name.as_str());
    let book_id = book["id"].as_i64().expect("No book ID");

    // Book reads are public
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send get book request");
    assert_eq!(response.status(), 200);

    // Update without categoryId keeps the existing category
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", &auth)
        .json(&json!({
            "title": "Dune Messiah",
            "author": "Frank Herbert",
            "publishingYear": 1969
        }))
        .send()
        .await
        .expect("Failed to send update book request");

    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.expect("Failed to parse update response");
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["categoryName"], category_name.as_str());

    // Deleting the category cascades to the book
    let response = client
        .delete(format!("{}/categories/{}", BASE_URL, category_id))
        .header("Authorization", &auth)
        .send()
        .await
        .expect("Failed to send delete category request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send get book request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_category_name_conflict() {
    let client = Client::new();
    let name = format!("History-{}", unique_suffix());

    create_category(&client, &name).await;

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", bearer_token("fixtures@example.com"))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send create category request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_blank_password_update_keeps_credentials() {
    let client = Client::new();
    let auth = bearer_token("fixtures@example.com");
    let email = unique_email("password");

    let customer = register_customer(&client, &email, "secret1").await;
    let customer_id = customer["id"].as_i64().expect("No customer ID");

    // Blank password leaves the stored hash unchanged
    let response = client
        .put(format!("{}/customers/{}", BASE_URL, customer_id))
        .header("Authorization", &auth)
        .json(&json!({
            "name": "Renamed Customer",
            "email": email,
            "password": ""
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 200);

    // A non-blank password replaces the hash
    let response = client
        .put(format!("{}/customers/{}", BASE_URL, customer_id))
        .header("Authorization", &auth)
        .json(&json!({
            "name": "Renamed Customer",
            "email": email,
            "password": "secret2"
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret2" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unknown_customer_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/customers/999999999", BASE_URL))
        .header("Authorization", bearer_token("fixtures@example.com"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
