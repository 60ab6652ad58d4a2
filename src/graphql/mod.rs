//! GraphQL schema for the book catalog

pub mod mutation;
pub mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::services::Services;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the service layer as context data
pub fn build_schema(services: Services) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}
