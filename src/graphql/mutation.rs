//! Mutation root: the state-changing operations

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    models::{Book, BookInput, BookPatch},
    services::Services,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book to the catalog. The id is assigned by the service.
    /// Raises an INVALID_YEAR error when the publication year is out of bounds.
    async fn add_book(&self, ctx: &Context<'_>, input: BookInput) -> Result<Book> {
        let services = ctx.data::<Services>()?;
        services.catalog.add_book(input).await.map_err(|e| e.extend())
    }

    /// Update an existing book, overwriting only the supplied fields.
    /// Returns null (not an error) when no record matches the id.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: BookPatch,
    ) -> Result<Option<Book>> {
        let services = ctx.data::<Services>()?;
        services
            .catalog
            .update_book(id.as_str(), input)
            .await
            .map_err(|e| e.extend())
    }

    /// Delete a book. Returns false (not an error) when no record matches the id.
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let services = ctx.data::<Services>()?;
        Ok(services.catalog.delete_book(id.as_str()).await)
    }
}
