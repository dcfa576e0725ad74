use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Arc, Mutex},
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection is not open")]
    Closed,

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Connection settings applied to every handle.
///
/// The bundled SQLite enforces foreign keys by default. `posts.author_id` is
/// not checked against `users`, so enforcement is switched off.
pub fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", false)
}

// ============================================================================
// STORAGE HANDLE - One SQLite connection shared by every handler
// ============================================================================
/// Cloning is cheap: every clone points at the same connection.
///
/// SQLite calls are blocking, so `call` moves them onto tokio's blocking
/// pool. The mutex serializes statements against the file, the same way a
/// single driver connection would.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Self::from_connection(Connection::open(path.as_ref())?)?;
        info!(path = %path.as_ref().display(), "Connected to SQLite database");
        Ok(db)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        configure(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// A handle with no connection behind it. Every call fails with
    /// `StorageError::Closed`.
    pub fn detached() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Run `f` against the connection on the blocking pool.
    pub async fn call<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let conn = guard.as_ref().ok_or(StorageError::Closed)?;
            f(conn).map_err(StorageError::from)
        })
        .await?
    }

    /// Take the connection out of the handle and close it.
    ///
    /// Closing an already closed handle is a no-op.
    pub fn close(&self) -> Result<(), StorageError> {
        let taken = self
            .conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        match taken {
            Some(conn) => conn.close().map_err(|(_, e)| StorageError::Sqlite(e)),
            None => {
                debug!("database already closed");
                Ok(())
            }
        }
    }
}
