//! Track model and database operations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Track {
    pub track_id: Uuid,
    pub artist_id: Uuid,
    pub album_id: Uuid,
    pub name: String,
    /// Duration in seconds.
    pub duration: i64,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewTrack {
    pub artist_id: Uuid,
    pub album_id: Uuid,
    pub name: String,
    pub duration: i64,
    pub hidden: bool,
}

/// Partial update; the owning artist and album are immutable.
#[derive(Debug, Default)]
pub struct TrackPatch {
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Default)]
pub struct TrackFilter {
    pub artist_id: Option<Uuid>,
    pub album_id: Option<Uuid>,
    pub hidden: Option<bool>,
}

pub async fn list_tracks(
    pool: &SqlitePool,
    filter: &TrackFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Track>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT track_id, artist_id, album_id, name, duration, hidden, created_at, updated_at \
         FROM tracks WHERE 1=1",
    );
    if let Some(artist_id) = filter.artist_id {
        query.push(" AND artist_id = ").push_bind(artist_id);
    }
    if let Some(album_id) = filter.album_id {
        query.push(" AND album_id = ").push_bind(album_id);
    }
    if let Some(hidden) = filter.hidden {
        query.push(" AND hidden = ").push_bind(hidden);
    }
    query.push(" LIMIT ").push_bind(limit);
    query.push(" OFFSET ").push_bind(offset);

    query.build_query_as::<Track>().fetch_all(pool).await
}

pub async fn find_track(pool: &SqlitePool, track_id: Uuid) -> Result<Option<Track>, sqlx::Error> {
    sqlx::query_as::<_, Track>(
        r#"
        SELECT track_id, artist_id, album_id, name, duration, hidden, created_at, updated_at
        FROM tracks
        WHERE track_id = ?
        "#,
    )
    .bind(track_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_track(pool: &SqlitePool, new: NewTrack) -> Result<Track, sqlx::Error> {
    let track_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Track>(
        r#"
        INSERT INTO tracks (track_id, artist_id, album_id, name, duration, hidden, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING track_id, artist_id, album_id, name, duration, hidden, created_at, updated_at
        "#,
    )
    .bind(track_id)
    .bind(new.artist_id)
    .bind(new.album_id)
    .bind(&new.name)
    .bind(new.duration)
    .bind(new.hidden)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_track(
    pool: &SqlitePool,
    track_id: Uuid,
    patch: &TrackPatch,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tracks
        SET name = COALESCE(?, name),
            duration = COALESCE(?, duration),
            hidden = COALESCE(?, hidden),
            updated_at = ?
        WHERE track_id = ?
        "#,
    )
    .bind(&patch.name)
    .bind(patch.duration)
    .bind(patch.hidden)
    .bind(Utc::now())
    .bind(track_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_track(pool: &SqlitePool, track_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tracks WHERE track_id = ?")
        .bind(track_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
