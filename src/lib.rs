//! Tunedeck
//!
//! REST backend for a music library: artists, albums, tracks, favorites,
//! and users, with JWT authentication and role-based authorization.
//!
//! Every handler follows the same shape: the auth middleware verifies the
//! bearer token, the authorization policy checks the caller's role, the
//! handler validates the request and performs a single-table operation
//! through sqlx, and the result is wrapped in the uniform
//! `{status, data, message, error}` envelope.

pub mod albums;
pub mod artists;
pub mod auth;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod favorites;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod tracks;
pub mod validate;
