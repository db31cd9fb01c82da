//! Artist model and database operations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Artist {
    pub artist_id: Uuid,
    pub name: String,
    pub grammy: bool,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a new artist.
#[derive(Debug)]
pub struct NewArtist {
    pub name: String,
    pub grammy: bool,
    pub hidden: bool,
}

/// Partial update; `None` leaves the stored field untouched.
#[derive(Debug, Default)]
pub struct ArtistPatch {
    pub name: Option<String>,
    pub grammy: Option<bool>,
    pub hidden: Option<bool>,
}

/// Equality filters for the list query.
#[derive(Debug, Default)]
pub struct ArtistFilter {
    pub grammy: Option<bool>,
    pub hidden: Option<bool>,
}

pub async fn list_artists(
    pool: &SqlitePool,
    filter: &ArtistFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Artist>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT artist_id, name, grammy, hidden, created_at, updated_at FROM artists WHERE 1=1",
    );
    if let Some(grammy) = filter.grammy {
        query.push(" AND grammy = ").push_bind(grammy);
    }
    if let Some(hidden) = filter.hidden {
        query.push(" AND hidden = ").push_bind(hidden);
    }
    query.push(" LIMIT ").push_bind(limit);
    query.push(" OFFSET ").push_bind(offset);

    query.build_query_as::<Artist>().fetch_all(pool).await
}

pub async fn find_artist(pool: &SqlitePool, artist_id: Uuid) -> Result<Option<Artist>, sqlx::Error> {
    sqlx::query_as::<_, Artist>(
        r#"
        SELECT artist_id, name, grammy, hidden, created_at, updated_at
        FROM artists
        WHERE artist_id = ?
        "#,
    )
    .bind(artist_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_artist(pool: &SqlitePool, new: NewArtist) -> Result<Artist, sqlx::Error> {
    let artist_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Artist>(
        r#"
        INSERT INTO artists (artist_id, name, grammy, hidden, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING artist_id, name, grammy, hidden, created_at, updated_at
        "#,
    )
    .bind(artist_id)
    .bind(&new.name)
    .bind(new.grammy)
    .bind(new.hidden)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Apply only the recognized fields; returns the number of rows touched
/// (0 when the artist does not exist).
pub async fn update_artist(
    pool: &SqlitePool,
    artist_id: Uuid,
    patch: &ArtistPatch,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE artists
        SET name = COALESCE(?, name),
            grammy = COALESCE(?, grammy),
            hidden = COALESCE(?, hidden),
            updated_at = ?
        WHERE artist_id = ?
        "#,
    )
    .bind(&patch.name)
    .bind(patch.grammy)
    .bind(patch.hidden)
    .bind(Utc::now())
    .bind(artist_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_artist(pool: &SqlitePool, artist_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM artists WHERE artist_id = ?")
        .bind(artist_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
