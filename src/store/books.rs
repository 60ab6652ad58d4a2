//! In-memory book store.
//!
//! The catalog is a single ordered `Vec` holding the process-lifetime state;
//! lookups are linear scans. The id counter lives inside the same lock as the
//! collection, so interleaved creates serialize on the write lock and an id is
//! never handed out twice, including after deletions.

use tokio::sync::RwLock;

use async_graphql::ID;

use crate::models::{Book, BookInput, BookPatch};

struct CatalogInner {
    books: Vec<Book>,
    next_id: u64,
}

/// Shared in-memory catalog of book records, insertion order preserved.
pub struct BookStore {
    inner: RwLock<CatalogInner>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogInner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store seeded with the fixed sample records served at startup
    pub fn with_sample_books() -> Self {
        let books = vec![
            Book {
                id: ID::from("1"),
                title: "The Great Gatsby".to_string(),
                author: "F. Scott Fitzgerald".to_string(),
                year: Some(1925),
                genre: Some("Novel".to_string()),
            },
            Book {
                id: ID::from("2"),
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
                year: Some(1960),
                genre: Some("Southern Gothic".to_string()),
            },
        ];
        let next_id = books.len() as u64 + 1;
        Self {
            inner: RwLock::new(CatalogInner { books, next_id }),
        }
    }

    /// All books in catalog order
    pub async fn list(&self) -> Vec<Book> {
        self.inner.read().await.books.clone()
    }

    /// Find a book by id
    pub async fn get(&self, id: &str) -> Option<Book> {
        self.inner
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id.as_str() == id)
            .cloned()
    }

    /// Books whose title or author contains `term`, case-insensitively.
    /// An empty term matches everything.
    pub async fn search(&self, term: &str) -> Vec<Book> {
        let term = term.to_lowercase();
        self.inner
            .read()
            .await
            .books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&term)
                    || b.author.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Append a new book, assigning the next id from the monotonic counter
    pub async fn insert(&self, input: BookInput) -> Book {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.to_string();
        inner.next_id += 1;
        let book = Book {
            id: ID::from(id),
            title: input.title,
            author: input.author,
            year: input.year,
            genre: input.genre,
        };
        inner.books.push(book.clone());
        book
    }

    /// Merge the patch over the book with the given id, if present
    pub async fn update(&self, id: &str, patch: &BookPatch) -> Option<Book> {
        let mut inner = self.inner.write().await;
        let book = inner.books.iter_mut().find(|b| b.id.as_str() == id)?;
        patch.apply_to(book);
        Some(book.clone())
    }

    /// Remove the book with the given id. Returns whether a record was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;
        match inner.books.iter().position(|b| b.id.as_str() == id) {
            Some(index) => {
                inner.books.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
