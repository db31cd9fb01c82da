//! Application state shared across handlers.
//!
//! `AppState` is the central state container. `FromRef` implementations let
//! handlers extract only the piece they need (the pool, or the token keys)
//! without taking the whole state.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::TokenKeys;

/// Shared application state.
///
/// The pool is the single shared mutable resource; handlers hold no state
/// between requests.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: SqlitePool,
    /// HMAC keys for issuing and verifying session tokens.
    pub token_keys: TokenKeys,
}

impl AppState {
    pub fn new(pool: SqlitePool, token_keys: TokenKeys) -> Self {
        Self { pool, token_keys }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_keys.clone()
    }
}
