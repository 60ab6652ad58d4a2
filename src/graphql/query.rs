//! Query root: the read-only operations

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{models::Book, services::Services};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all books in catalog order
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let services = ctx.data::<Services>()?;
        Ok(services.catalog.list_books().await)
    }

    /// Get a book by id. Raises a NOT_FOUND error when no record matches.
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Book> {
        let services = ctx.data::<Services>()?;
        services
            .catalog
            .get_book(id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    /// Search books whose title or author contains the query, case-insensitively
    async fn search_books(&self, ctx: &Context<'_>, query: String) -> Result<Vec<Book>> {
        let services = ctx.data::<Services>()?;
        Ok(services.catalog.search_books(&query).await)
    }
}
