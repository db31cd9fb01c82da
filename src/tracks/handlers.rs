//! Track HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::albums::db::find_album;
use crate::artists::db::find_artist;
use crate::auth::policy::{self, Action};
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::tracks::db::{self, NewTrack, TrackFilter, TrackPatch};
use crate::validate::{default_limit, parse_id, FieldCheck};

#[derive(Debug, Deserialize)]
pub struct TrackListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub artist_id: Option<Uuid>,
    pub album_id: Option<Uuid>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTrackRequest {
    pub artist_id: Option<Uuid>,
    pub album_id: Option<Uuid>,
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub hidden: Option<bool>,
}

impl CreateTrackRequest {
    fn validate(self) -> Result<NewTrack, ApiError> {
        let mut check = FieldCheck::new();
        let artist_id = check.required("artist_id", self.artist_id);
        let album_id = check.required("album_id", self.album_id);
        let name = check.required_text("name", self.name);
        let duration = check.required("duration", self.duration);
        let hidden = check.required("hidden", self.hidden);
        check.finish()?;

        match (artist_id, album_id, name, duration, hidden) {
            (Some(artist_id), Some(album_id), Some(name), Some(duration), Some(hidden)) => {
                Ok(NewTrack {
                    artist_id,
                    album_id,
                    name,
                    duration,
                    hidden,
                })
            }
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTrackRequest {
    pub name: Option<String>,
    pub duration: Option<i64>,
    pub hidden: Option<bool>,
}

impl UpdateTrackRequest {
    fn validate(self) -> Result<TrackPatch, ApiError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ApiError::invalid_input(
                    "Bad Request, Reason: Missing Field(s) - name",
                ));
            }
        }
        Ok(TrackPatch {
            name: self.name,
            duration: self.duration,
            hidden: self.hidden,
        })
    }
}

/// `GET /api/v1/tracks`
pub async fn list_tracks(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<TrackListQuery>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadCatalog)?;

    let filter = TrackFilter {
        artist_id: params.artist_id,
        album_id: params.album_id,
        hidden: params.hidden,
    };
    let tracks = db::list_tracks(&pool, &filter, params.limit, params.offset).await?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(tracks)?,
        "Tracks retrieved successfully.",
    ))
}

/// `GET /api/v1/tracks/{id}`
pub async fn get_track(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadCatalog)?;
    let track_id = parse_id(&id)?;

    let track = db::find_track(&pool, track_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Track not found."))?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(track)?,
        "Track retrieved successfully.",
    ))
}

/// `POST /api/v1/tracks/add-track`
///
/// Both the owning artist and album must exist before the track is created.
pub async fn add_track(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<CreateTrackRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;

    let new = request.validate()?;

    if find_artist(&pool, new.artist_id).await?.is_none() {
        return Err(ApiError::not_found("Artist not found."));
    }
    if find_album(&pool, new.album_id).await?.is_none() {
        return Err(ApiError::not_found("Album not found."));
    }

    let track = db::create_track(&pool, new).await?;
    tracing::info!("track created: {}", track.track_id);

    Ok(ApiSuccess::with_data(
        StatusCode::CREATED,
        json!({ "track_id": track.track_id }),
        "Track created successfully.",
    ))
}

/// `PUT /api/v1/tracks/{id}`
pub async fn update_track(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTrackRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;
    let track_id = parse_id(&id)?;

    let patch = request.validate()?;
    let touched = db::update_track(&pool, track_id, &patch).await?;
    if touched == 0 {
        return Err(ApiError::not_found("Track not found."));
    }

    Ok(ApiSuccess::no_content())
}

/// `DELETE /api/v1/tracks/{id}`
pub async fn delete_track(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;
    let track_id = parse_id(&id)?;

    let removed = db::delete_track(&pool, track_id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Track not found."));
    }

    tracing::info!("track deleted: {track_id}");

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "Track deleted successfully.",
    ))
}
