use rusqlite::{Connection, ErrorCode, ffi, params};
use serde::Serialize;

/// Thumbs up/down counts for one song.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingSummary {
    pub thumbs_up: i64,
    pub thumbs_down: i64,
    pub total: i64,
}

impl RatingSummary {
    pub fn for_song(conn: &Connection, title: &str, artist: &str) -> rusqlite::Result<Self> {
        conn.query_row(
            "SELECT COALESCE(SUM(CASE WHEN rating = 1 THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN rating = -1 THEN 1 ELSE 0 END), 0)
             FROM song_ratings
             WHERE song_title = ?1 AND song_artist = ?2",
            params![title, artist],
            |row| {
                let thumbs_up: i64 = row.get(0)?;
                let thumbs_down: i64 = row.get(1)?;
                Ok(Self {
                    thumbs_up,
                    thumbs_down,
                    total: thumbs_up + thumbs_down,
                })
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingOutcome {
    Submitted,
    Updated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub user_identifier: String,
    pub rating: i64,
}

impl NewRating {
    /// Records the rating. A rater can hold one rating per song: a repeat
    /// replaces the stored rating and refreshes its timestamp.
    pub fn save(&self, conn: &Connection) -> rusqlite::Result<RatingOutcome> {
        let inserted = conn.execute(
            "INSERT INTO song_ratings (song_title, song_artist, song_album, user_identifier, rating)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.title,
                self.artist,
                self.album,
                self.user_identifier,
                self.rating
            ],
        );

        match inserted {
            Ok(_) => Ok(RatingOutcome::Submitted),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation
                    && e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                conn.execute(
                    "UPDATE song_ratings
                     SET rating = ?1, created_at = CURRENT_TIMESTAMP
                     WHERE song_title = ?2 AND song_artist = ?3 AND user_identifier = ?4",
                    params![self.rating, self.title, self.artist, self.user_identifier],
                )?;
                Ok(RatingOutcome::Updated)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = include_str!("../../tests/fixtures/schema.sql");

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn
    }

    fn rating(user: &str, value: i64) -> NewRating {
        NewRating {
            title: "Blue Monday".into(),
            artist: "New Order".into(),
            album: String::new(),
            user_identifier: user.into(),
            rating: value,
        }
    }

    #[test]
    fn unrated_song_has_zero_counts() {
        let summary = RatingSummary::for_song(&conn(), "Nothing", "Nobody").unwrap();
        assert_eq!(summary, RatingSummary::default());
    }

    #[test]
    fn counts_each_direction() {
        let conn = conn();
        rating("user_a", 1).save(&conn).unwrap();
        rating("user_b", 1).save(&conn).unwrap();
        rating("user_c", -1).save(&conn).unwrap();

        let summary = RatingSummary::for_song(&conn, "Blue Monday", "New Order").unwrap();

        assert_eq!(
            summary,
            RatingSummary {
                thumbs_up: 2,
                thumbs_down: 1,
                total: 3
            }
        );
    }

    #[test]
    fn second_rating_from_same_rater_replaces_the_first() {
        let conn = conn();

        assert_eq!(rating("user_a", 1).save(&conn).unwrap(), RatingOutcome::Submitted);
        assert_eq!(rating("user_a", -1).save(&conn).unwrap(), RatingOutcome::Updated);

        let summary = RatingSummary::for_song(&conn, "Blue Monday", "New Order").unwrap();
        assert_eq!(summary.thumbs_up, 0);
        assert_eq!(summary.thumbs_down, 1);
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn other_constraint_failures_are_not_treated_as_repeats() {
        let conn = conn();
        let err = rating("user_a", 5).save(&conn).unwrap_err();
        assert_eq!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation));
    }
}
