//! GraphQL schema tests, executed in-process against a fresh seeded catalog

use std::sync::Arc;

use chrono::Datelike;
use serde_json::{json, Value};

use bookshelf_server::{
    graphql::{self, CatalogSchema},
    services::Services,
    store::BookStore,
};

/// Build a schema over a freshly seeded store
fn seeded_schema() -> CatalogSchema {
    let store = Arc::new(BookStore::with_sample_books());
    graphql::build_schema(Services::new(store))
}

/// Execute an operation and return (data, errors) as JSON
async fn execute(schema: &CatalogSchema, operation: &str) -> (Value, Value) {
    let response = schema.execute(operation).await;
    let errors = serde_json::to_value(&response.errors).expect("Failed to serialize errors");
    let data = response.data.into_json().expect("Failed to serialize data");
    (data, errors)
}

#[tokio::test]
async fn test_books_returns_the_seeded_catalog_in_order() {
    let schema = seeded_schema();
    let (data, errors) = execute(&schema, "{ books { id title author year genre } }").await;

    assert_eq!(errors, json!([]));
    assert_eq!(
        data["books"],
        json!([
            {
                "id": "1",
                "title": "The Great Gatsby",
                "author": "F. Scott Fitzgerald",
                "year": 1925,
                "genre": "Novel"
            },
            {
                "id": "2",
                "title": "To Kill a Mockingbird",
                "author": "Harper Lee",
                "year": 1960,
                "genre": "Southern Gothic"
            }
        ])
    );
}

#[tokio::test]
async fn test_book_by_id() {
    let schema = seeded_schema();
    let (data, errors) = execute(&schema, r#"{ book(id: "1") { title } }"#).await;

    assert_eq!(errors, json!([]));
    assert_eq!(data["book"]["title"], "The Great Gatsby");
}

#[tokio::test]
async fn test_book_absent_id_raises_not_found() {
    let schema = seeded_schema();
    let (data, errors) = execute(&schema, r#"{ book(id: "99") { title } }"#).await;

    assert_eq!(data, Value::Null);
    assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_books_is_case_insensitive() {
    let schema = seeded_schema();
    let (lower, _) = execute(&schema, r#"{ searchBooks(query: "gatsby") { id } }"#).await;
    let (upper, _) = execute(&schema, r#"{ searchBooks(query: "GATSBY") { id } }"#).await;

    assert_eq!(lower, upper);
    assert_eq!(lower["searchBooks"], json!([{"id": "1"}]));
}

#[tokio::test]
async fn test_search_books_empty_query_matches_all() {
    let schema = seeded_schema();
    let (data, errors) = execute(&schema, r#"{ searchBooks(query: "") { id } }"#).await;

    assert_eq!(errors, json!([]));
    assert_eq!(data["searchBooks"], json!([{"id": "1"}, {"id": "2"}]));
}

#[tokio::test]
async fn test_search_books_no_match_is_empty_not_error() {
    let schema = seeded_schema();
    let (data, errors) = execute(&schema, r#"{ searchBooks(query: "tolkien") { id } }"#).await;

    assert_eq!(errors, json!([]));
    assert_eq!(data["searchBooks"], json!([]));
}

#[tokio::test]
async fn test_add_book_assigns_the_next_id() {
    let schema = seeded_schema();
    let (data, errors) = execute(
        &schema,
        r#"mutation {
            addBook(input: { title: "Dune", author: "Frank Herbert", year: 1965, genre: "Science Fiction" }) {
                id title author year genre
            }
        }"#,
    )
    .await;

    assert_eq!(errors, json!([]));
    assert_eq!(
        data["addBook"],
        json!({
            "id": "3",
            "title": "Dune",
            "author": "Frank Herbert",
            "year": 1965,
            "genre": "Science Fiction"
        })
    );

    let (data, _) = execute(&schema, "{ books { id } }").await;
    assert_eq!(data["books"], json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]));
}

#[tokio::test]
async fn test_add_book_optional_fields_default_to_null() {
    let schema = seeded_schema();
    let (data, errors) = execute(
        &schema,
        r#"mutation { addBook(input: { title: "X", author: "Y" }) { id year genre } }"#,
    )
    .await;

    assert_eq!(errors, json!([]));
    assert_eq!(data["addBook"]["year"], Value::Null);
    assert_eq!(data["addBook"]["genre"], Value::Null);
}

#[tokio::test]
async fn test_add_book_rejects_far_future_year() {
    let schema = seeded_schema();
    let bad_year = chrono::Utc::now().year() + 2;
    let operation = format!(
        r#"mutation {{ addBook(input: {{ title: "X", author: "Y", year: {} }}) {{ id }} }}"#,
        bad_year
    );

    let (data, errors) = execute(&schema, &operation).await;
    assert_eq!(data, Value::Null);
    assert_eq!(errors[0]["extensions"]["code"], "INVALID_YEAR");

    // Nothing was appended.
    let (data, _) = execute(&schema, "{ books { id } }").await;
    assert_eq!(data["books"], json!([{"id": "1"}, {"id": "2"}]));
}

#[tokio::test]
async fn test_add_book_accepts_current_year() {
    let schema = seeded_schema();
    let year = chrono::Utc::now().year();
    let operation = format!(
        r#"mutation {{ addBook(input: {{ title: "X", author: "Y", year: {} }}) {{ year }} }}"#,
        year
    );

    let (data, errors) = execute(&schema, &operation).await;
    assert_eq!(errors, json!([]));
    assert_eq!(data["addBook"]["year"], json!(year));
}

#[tokio::test]
async fn test_update_book_merges_only_supplied_fields() {
    let schema = seeded_schema();
    let (data, errors) = execute(
        &schema,
        r#"mutation {
            updateBook(id: "2", input: { genre: "Classic" }) { id title author year genre }
        }"#,
    )
    .await;

    assert_eq!(errors, json!([]));
    assert_eq!(
        data["updateBook"],
        json!({
            "id": "2",
            "title": "To Kill a Mockingbird",
            "author": "Harper Lee",
            "year": 1960,
            "genre": "Classic"
        })
    );
}

#[tokio::test]
async fn test_update_book_absent_id_returns_null_not_error() {
    let schema = seeded_schema();
    let (data, errors) = execute(
        &schema,
        r#"mutation { updateBook(id: "99", input: { title: "Nope" }) { id } }"#,
    )
    .await;

    assert_eq!(errors, json!([]));
    assert_eq!(data["updateBook"], Value::Null);
}

#[tokio::test]
async fn test_delete_book_then_lookup_raises_not_found() {
    let schema = seeded_schema();

    let (data, errors) = execute(&schema, r#"mutation { deleteBook(id: "1") }"#).await;
    assert_eq!(errors, json!([]));
    assert_eq!(data["deleteBook"], json!(true));

    let (data, errors) = execute(&schema, r#"{ book(id: "1") { title } }"#).await;
    assert_eq!(data, Value::Null);
    assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_book_absent_id_returns_false() {
    let schema = seeded_schema();
    let (data, errors) = execute(&schema, r#"mutation { deleteBook(id: "42") }"#).await;

    assert_eq!(errors, json!([]));
    assert_eq!(data["deleteBook"], json!(false));

    let (data, _) = execute(&schema, "{ books { id } }").await;
    assert_eq!(data["books"], json!([{"id": "1"}, {"id": "2"}]));
}

#[tokio::test]
async fn test_seed_scenario_end_to_end() {
    let schema = seeded_schema();

    let (data, _) = execute(&schema, r#"{ searchBooks(query: "lee") { id title } }"#).await;
    assert_eq!(
        data["searchBooks"],
        json!([{"id": "2", "title": "To Kill a Mockingbird"}])
    );

    let (data, _) = execute(&schema, r#"mutation { deleteBook(id: "1") }"#).await;
    assert_eq!(data["deleteBook"], json!(true));

    let (data, errors) = execute(&schema, r#"{ book(id: "1") { id } }"#).await;
    assert_eq!(data, Value::Null);
    assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_schema_rejects_missing_required_create_fields() {
    let schema = seeded_schema();
    let (_, errors) = execute(&schema, r#"mutation { addBook(input: { title: "X" }) { id } }"#).await;

    // author is non-null in BookInput, so validation fails before resolution
    assert_ne!(errors, json!([]));
}
