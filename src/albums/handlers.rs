//! Album HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::albums::db::{self, AlbumFilter, AlbumPatch, NewAlbum};
use crate::artists::db::find_artist;
use crate::auth::policy::{self, Action};
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::validate::{default_limit, parse_id, FieldCheck};

#[derive(Debug, Deserialize)]
pub struct AlbumListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub artist_id: Option<Uuid>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub artist_id: Option<Uuid>,
    pub name: Option<String>,
    pub year: Option<i64>,
    pub hidden: Option<bool>,
}

impl CreateAlbumRequest {
    fn validate(self) -> Result<NewAlbum, ApiError> {
        let mut check = FieldCheck::new();
        let artist_id = check.required("artist_id", self.artist_id);
        let name = check.required_text("name", self.name);
        let year = check.required("year", self.year);
        let hidden = check.required("hidden", self.hidden);
        check.finish()?;

        match (artist_id, name, year, hidden) {
            (Some(artist_id), Some(name), Some(year), Some(hidden)) => Ok(NewAlbum {
                artist_id,
                name,
                year,
                hidden,
            }),
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAlbumRequest {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub hidden: Option<bool>,
}

impl UpdateAlbumRequest {
    fn validate(self) -> Result<AlbumPatch, ApiError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ApiError::invalid_input(
                    "Bad Request, Reason: Missing Field(s) - name",
                ));
            }
        }
        Ok(AlbumPatch {
            name: self.name,
            year: self.year,
            hidden: self.hidden,
        })
    }
}

/// `GET /api/v1/albums`
pub async fn list_albums(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<AlbumListQuery>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadCatalog)?;

    let filter = AlbumFilter {
        artist_id: params.artist_id,
        hidden: params.hidden,
    };
    let albums = db::list_albums(&pool, &filter, params.limit, params.offset).await?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(albums)?,
        "Albums retrieved successfully.",
    ))
}

/// `GET /api/v1/albums/{id}`
pub async fn get_album(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadCatalog)?;
    let album_id = parse_id(&id)?;

    let album = db::find_album(&pool, album_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Album not found."))?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(album)?,
        "Album retrieved successfully.",
    ))
}

/// `POST /api/v1/albums/add-album`
///
/// The owning artist must exist before the album is created.
pub async fn add_album(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<CreateAlbumRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;

    let new = request.validate()?;

    if find_artist(&pool, new.artist_id).await?.is_none() {
        return Err(ApiError::not_found("Artist not found."));
    }

    let album = db::create_album(&pool, new).await?;
    tracing::info!("album created: {}", album.album_id);

    Ok(ApiSuccess::with_data(
        StatusCode::CREATED,
        json!({ "album_id": album.album_id }),
        "Album created successfully.",
    ))
}

/// `PUT /api/v1/albums/{id}`
pub async fn update_album(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateAlbumRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;
    let album_id = parse_id(&id)?;

    let patch = request.validate()?;
    let touched = db::update_album(&pool, album_id, &patch).await?;
    if touched == 0 {
        return Err(ApiError::not_found("Album not found."));
    }

    Ok(ApiSuccess::no_content())
}

/// `DELETE /api/v1/albums/{id}`
pub async fn delete_album(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;
    let album_id = parse_id(&id)?;

    let removed = db::delete_album(&pool, album_id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Album not found."));
    }

    tracing::info!("album deleted: {album_id}");

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "Album deleted successfully.",
    ))
}
