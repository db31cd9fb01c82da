//! Favorite model and database operations.
//!
//! Every query is scoped to the owning user; a caller can only ever see
//! or remove their own rows. Uniqueness of the (user, category, item)
//! triple is enforced by the store, not by a read-then-write check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// What kind of catalog item a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
    Artist,
    Album,
    Track,
}

impl Category {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "artist" => Some(Self::Artist),
            "album" => Some(Self::Album),
            "track" => Some(Self::Track),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub favorite_id: Uuid,
    pub user_id: Uuid,
    pub category: Category,
    pub item_id: Uuid,
    pub created_at: DateTime<Utc>,
}

pub async fn list_favorites(
    pool: &SqlitePool,
    user_id: Uuid,
    category: Category,
    limit: i64,
    offset: i64,
) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(
        r#"
        SELECT favorite_id, user_id, category, item_id, created_at
        FROM favorites
        WHERE user_id = ? AND category = ?
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(user_id)
    .bind(category)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Insert a favorite; the unique index on (user_id, category, item_id)
/// rejects duplicates.
pub async fn create_favorite(
    pool: &SqlitePool,
    user_id: Uuid,
    category: Category,
    item_id: Uuid,
) -> Result<Favorite, sqlx::Error> {
    let favorite_id = Uuid::new_v4();

    sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (favorite_id, user_id, category, item_id, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING favorite_id, user_id, category, item_id, created_at
        "#,
    )
    .bind(favorite_id)
    .bind(user_id)
    .bind(category)
    .bind(item_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Delete only if the favorite belongs to `user_id`; 0 rows means
/// either absent or someone else's.
pub async fn delete_favorite(
    pool: &SqlitePool,
    favorite_id: Uuid,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM favorites WHERE favorite_id = ? AND user_id = ?")
        .bind(favorite_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
