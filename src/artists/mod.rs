//! Artists: model, queries, and HTTP handlers.

pub mod db;
pub mod handlers;
