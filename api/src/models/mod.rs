mod post;
mod rating;
mod user;

pub use post::{NewPost, Post, PublishedPost};
pub use rating::{NewRating, RatingOutcome, RatingSummary};
pub use user::User;

use rusqlite::{Row, types::Value as SqlValue};
use serde_json::Value;

/// Reads a column of the externally owned schema as whatever SQLite holds,
/// without forcing it into one Rust type.
pub(crate) fn column_json(row: &Row<'_>, name: &str) -> rusqlite::Result<Value> {
    Ok(match row.get::<_, SqlValue>(name)? {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(n) => Value::from(n),
        SqlValue::Real(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        SqlValue::Text(s) => Value::String(s),
        SqlValue::Blob(bytes) => Value::from(bytes),
    })
}
