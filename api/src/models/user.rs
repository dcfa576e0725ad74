use super::column_json;
use rusqlite::{Connection, Row};
use serde::Serialize;
use serde_json::Value;

/// A row of the `users` table. Users are created outside this service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: Value,
}

impl User {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            email: row.get("email")?,
            name: row.get("name")?,
            created_at: column_json(row, "created_at")?,
        })
    }

    /// Every user, in whatever order SQLite returns them.
    pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, email, name, created_at FROM users")?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }
}
