//! Business logic services

pub mod auth;
pub mod books;
pub mod categories;
pub mod customers;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub categories: categories::CategoriesService,
    pub customers: customers::CustomersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            books: books::BooksService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            customers: customers::CustomersService::new(repository),
        }
    }
}
