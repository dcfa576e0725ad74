mod common;

use axum::http::StatusCode;
use common::{exec, get, seeded_db, setup_app};
use radiocalio_api::Database;
use serde_json::json;

#[tokio::test]
async fn status_reports_running() {
    let app = setup_app(&Database::detached());

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "RadioCalio2 API Server", "status": "running"})
    );
}

#[tokio::test]
async fn lists_users_without_password_hashes() {
    let db = seeded_db();
    let app = setup_app(&db);

    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    let emails: Vec<&str> = users.iter().map(|u| u["email"].as_str().unwrap()).collect();
    assert!(emails.contains(&"admin@example.com"));
    assert!(emails.contains(&"user@example.com"));

    for user in users {
        assert!(user["id"].is_i64());
        assert!(user["name"].is_string());
        assert!(user["created_at"].is_string());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn non_text_timestamps_are_returned_as_stored() {
    let db = seeded_db();
    exec(
        &db,
        "INSERT INTO users (email, password_hash, name, created_at)
         VALUES ('legacy@example.com', 'x', 'Legacy User', 1700000000)",
    )
    .await;
    let app = setup_app(&db);

    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let legacy = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "legacy@example.com")
        .unwrap();
    assert_eq!(legacy["created_at"], 1700000000);
}

#[tokio::test]
async fn empty_users_table_gives_empty_list() {
    let db = seeded_db();
    exec(&db, "DELETE FROM users").await;
    let app = setup_app(&db);

    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"users": []}));
}

#[tokio::test]
async fn closed_database_fails_each_request_but_status_still_answers() {
    let db = seeded_db();
    let app = setup_app(&db);
    db.close().unwrap();

    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "database connection is not open"}));

    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn file_without_schema_reports_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("database.db")).unwrap();
    let app = setup_app(&db);

    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("no such table: users")
    );
}
