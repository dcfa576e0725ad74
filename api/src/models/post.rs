use super::column_json;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;
use serde_json::Value;

const SELECT_POSTS: &str = "
    SELECT p.id, p.title, p.content, p.published, p.created_at,
           u.name AS author_name, u.email AS author_email
    FROM posts p
    LEFT JOIN users u ON p.author_id = u.id";

const SELECT_PUBLISHED_POSTS: &str = "
    SELECT p.id, p.title, p.content, p.created_at,
           u.name AS author_name, u.email AS author_email
    FROM posts p
    LEFT JOIN users u ON p.author_id = u.id
    WHERE p.published = 1
    ORDER BY p.created_at DESC";

/// A post joined with its author.
///
/// Author fields are `None` when `author_id` matches no user. Columns the
/// service does not write itself are passed through as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub published: Option<i64>,
    pub created_at: Value,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

/// The published-only listing: a post without its `published` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedPost {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Value,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl PublishedPost {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            content: row.get("content")?,
            created_at: column_json(row, "created_at")?,
            author_name: row.get("author_name")?,
            author_email: row.get("author_email")?,
        })
    }

    /// Published posts only, newest first.
    pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_PUBLISHED_POSTS)?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }
}

impl Post {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            content: row.get("content")?,
            published: row.get("published")?,
            created_at: column_json(row, "created_at")?,
            author_name: row.get("author_name")?,
            author_email: row.get("author_email")?,
        })
    }

    /// All posts, newest first.
    pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("{SELECT_POSTS} ORDER BY p.created_at DESC"))?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }

    pub fn find(conn: &Connection, id: i64) -> rusqlite::Result<Option<Self>> {
        conn.query_row(
            &format!("{SELECT_POSTS} WHERE p.id = ?1"),
            [id],
            Self::from_row,
        )
        .optional()
    }
}

/// Fields accepted when creating a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub author_id: i64,
    pub published: i64,
}

impl NewPost {
    /// Inserts the post and returns its new id.
    pub fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO posts (title, content, author_id, published) VALUES (?1, ?2, ?3, ?4)",
            params![self.title, self.content, self.author_id, self.published],
        )?;
        Ok(conn.last_insert_rowid())
    }
}
