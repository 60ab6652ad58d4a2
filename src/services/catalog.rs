//! Catalog management service

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput, BookPatch},
    store::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<BookStore>,
}

impl CatalogService {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// List every book in catalog order
    pub async fn list_books(&self) -> Vec<Book> {
        self.store.list().await
    }

    /// Get a single book by id. Absence is an error on this path.
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Case-insensitive substring search over title and author.
    /// An empty result is valid, not an error.
    pub async fn search_books(&self, query: &str) -> Vec<Book> {
        self.store.search(query).await
    }

    /// Create a new book. The id is assigned by the store.
    pub async fn add_book(&self, input: BookInput) -> AppResult<Book> {
        if let Some(year) = input.year {
            validate_year(year)?;
        }

        let book = self.store.insert(input).await;
        tracing::info!(id = book.id.as_str(), title = %book.title, "book added to catalog");
        Ok(book)
    }

    /// Merge the supplied fields over an existing book.
    ///
    /// Returns `Ok(None)` when the id is unknown: absence on the write paths
    /// is a sentinel, not an error, unlike `get_book`. A supplied `year` is
    /// validated before the store is touched.
    pub async fn update_book(&self, id: &str, patch: BookPatch) -> AppResult<Option<Book>> {
        if let Some(year) = patch.year {
            validate_year(year)?;
        }

        let updated = self.store.update(id, &patch).await;
        if updated.is_some() {
            tracing::info!(id, "book updated");
        }
        Ok(updated)
    }

    /// Remove a book. Returns `false` when the id is unknown.
    pub async fn delete_book(&self, id: &str) -> bool {
        let removed = self.store.remove(id).await;
        if removed {
            tracing::info!(id, "book deleted from catalog");
        }
        removed
    }
}

/// Publication years are accepted from 0 up to one year in the future.
fn validate_year(year: i32) -> AppResult<()> {
    let max = Utc::now().year() + 1;
    if !(0..=max).contains(&year) {
        return Err(AppError::InvalidYear { year, max });
    }
    Ok(())
}
