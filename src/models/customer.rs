//! Customer model, request/response types, and JWT claims

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full customer record from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    /// Stored exactly as registered; uniqueness is case-sensitive
    pub email: String,
    /// Argon2 PHC hash, never serialized in responses
    #[serde(skip_serializing)]
    pub password: String,
}

/// Customer representation returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id,
            name: customer.name,
            email: customer.email,
        }
    }
}

/// Register customer request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterCustomer {
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be blank"))]
    pub password: String,
}

/// Update customer request
///
/// Name and email always overwrite the stored values. The password is
/// re-hashed and replaced only when a non-blank value is supplied.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: Option<String>,
}

/// JWT claims for authenticated customers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Customer email
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for a subject, stamped with the current time
    pub fn new(subject: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Create a new JWT token signed with the given symmetric secret
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token; rejects bad signatures, malformed
    /// tokens, and tokens whose `exp` has passed
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_roundtrip_yields_subject() {
        let claims = TokenClaims::new("reader@example.com", 3600);
        let token = claims.create_token(SECRET).unwrap();
        let verified = TokenClaims::from_token(&token, SECRET).unwrap();
        assert_eq!(verified.sub, "reader@example.com");
        assert_eq!(verified.exp, verified.iat + 3600);
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = TokenClaims::new("reader@example.com", 3600)
            .create_token(SECRET)
            .unwrap();
        assert!(TokenClaims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "reader@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = claims.create_token(SECRET).unwrap();
        assert!(TokenClaims::from_token(&token, SECRET).is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(TokenClaims::from_token("not-a-jwt", SECRET).is_err());
    }

    #[test]
    fn register_rejects_malformed_email() {
        let request = RegisterCustomer {
            name: "Reader".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn register_rejects_blank_name() {
        let request = RegisterCustomer {
            name: String::new(),
            email: "reader@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
