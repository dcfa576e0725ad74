#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use radiocalio_api::{AppState, Database, app};
use rusqlite::Connection;
use serde_json::Value;
use std::path::Path;
use tower::ServiceExt;

pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// In-memory database with the schema and two users, the same seed data the
/// setup script writes.
pub fn seeded_db() -> Database {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute_batch(
        "INSERT INTO users (email, password_hash, name) VALUES ('admin@example.com', 'hashed_password', 'Admin User');
         INSERT INTO users (email, password_hash, name) VALUES ('user@example.com', 'hashed_password', 'Regular User');",
    )
    .unwrap();
    Database::from_connection(conn).unwrap()
}

pub fn setup_app(db: &Database) -> Router {
    app(AppState::new(db.clone()), "public")
}

pub fn setup_app_with_static(db: &Database, static_dir: &Path) -> Router {
    app(AppState::new(db.clone()), static_dir)
}

pub async fn exec(db: &Database, sql: &'static str) {
    db.call(move |conn| conn.execute_batch(sql)).await.unwrap();
}

pub async fn count(db: &Database, table: &'static str) -> i64 {
    db.call(move |conn| {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
    })
    .await
    .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
