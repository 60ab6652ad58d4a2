//! Book record model and input types

use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// The `id` is assigned by the catalog when the book is created and is never
/// client-supplied or overwritable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

/// Input for creating a book. Title and author are required.
#[derive(Debug, Clone, Serialize, Deserialize, InputObject)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

/// Partial update for an existing book. Every field is optional; only the
/// supplied fields overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, InputObject)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl BookPatch {
    /// Overwrite only the fields present in the patch. The id is immutable.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.year {
            book.year = Some(year);
        }
        if let Some(genre) = &self.genre {
            book.genre = Some(genre.clone());
        }
    }
}
