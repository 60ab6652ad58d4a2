//! Bookshelf Book Catalog Server
//!
//! A Rust GraphQL API server exposing CRUD operations over an in-memory
//! catalog of book records, with a GraphiQL console for interactive testing.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub schema: graphql::CatalogSchema,
}
