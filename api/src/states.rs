use crate::db::Database;

// ============================================================================
// APPLICATION STATE - Shared by every handler
// ============================================================================
/// The storage handle is constructed by `main` and handed to the router
/// here; handlers never open connections themselves.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
