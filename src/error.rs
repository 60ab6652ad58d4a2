//! Error types for Bookshelf server

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Machine-readable error codes carried in GraphQL error extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    InvalidYear,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidYear => "INVALID_YEAR",
        }
    }
}

/// Main application error type.
///
/// Only the error-raising paths appear here. Absence on the write paths is
/// signalled in-band instead: `updateBook` returns `null` and `deleteBook`
/// returns `false` for an unknown id.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Invalid publication year {year}: must be between 0 and {max}")]
    InvalidYear { year: i32, max: i32 },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InvalidYear { .. } => ErrorCode::InvalidYear,
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code().as_str()))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
