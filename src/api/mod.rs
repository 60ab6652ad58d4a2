//! HTTP handlers for the Bookshelf endpoints

pub mod graphql;
pub mod health;
