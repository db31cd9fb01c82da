//! Album model and database operations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Album {
    pub album_id: Uuid,
    pub artist_id: Uuid,
    pub name: String,
    pub year: i64,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewAlbum {
    pub artist_id: Uuid,
    pub name: String,
    pub year: i64,
    pub hidden: bool,
}

/// Partial update; the owning artist is immutable.
#[derive(Debug, Default)]
pub struct AlbumPatch {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Default)]
pub struct AlbumFilter {
    pub artist_id: Option<Uuid>,
    pub hidden: Option<bool>,
}

pub async fn list_albums(
    pool: &SqlitePool,
    filter: &AlbumFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Album>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT album_id, artist_id, name, year, hidden, created_at, updated_at FROM albums WHERE 1=1",
    );
    if let Some(artist_id) = filter.artist_id {
        query.push(" AND artist_id = ").push_bind(artist_id);
    }
    if let Some(hidden) = filter.hidden {
        query.push(" AND hidden = ").push_bind(hidden);
    }
    query.push(" LIMIT ").push_bind(limit);
    query.push(" OFFSET ").push_bind(offset);

    query.build_query_as::<Album>().fetch_all(pool).await
}

pub async fn find_album(pool: &SqlitePool, album_id: Uuid) -> Result<Option<Album>, sqlx::Error> {
    sqlx::query_as::<_, Album>(
        r#"
        SELECT album_id, artist_id, name, year, hidden, created_at, updated_at
        FROM albums
        WHERE album_id = ?
        "#,
    )
    .bind(album_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_album(pool: &SqlitePool, new: NewAlbum) -> Result<Album, sqlx::Error> {
    let album_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Album>(
        r#"
        INSERT INTO albums (album_id, artist_id, name, year, hidden, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING album_id, artist_id, name, year, hidden, created_at, updated_at
        "#,
    )
    .bind(album_id)
    .bind(new.artist_id)
    .bind(&new.name)
    .bind(new.year)
    .bind(new.hidden)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_album(
    pool: &SqlitePool,
    album_id: Uuid,
    patch: &AlbumPatch,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE albums
        SET name = COALESCE(?, name),
            year = COALESCE(?, year),
            hidden = COALESCE(?, hidden),
            updated_at = ?
        WHERE album_id = ?
        "#,
    )
    .bind(&patch.name)
    .bind(patch.year)
    .bind(patch.hidden)
    .bind(Utc::now())
    .bind(album_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_album(pool: &SqlitePool, album_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM albums WHERE album_id = ?")
        .bind(album_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
