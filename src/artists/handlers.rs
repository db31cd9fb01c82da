//! Artist HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::artists::db::{self, ArtistFilter, ArtistPatch, NewArtist};
use crate::auth::policy::{self, Action};
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::validate::{default_limit, parse_id, FieldCheck};

#[derive(Debug, Deserialize)]
pub struct ArtistListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub grammy: Option<bool>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArtistRequest {
    pub name: Option<String>,
    pub grammy: Option<bool>,
    pub hidden: Option<bool>,
}

impl CreateArtistRequest {
    fn validate(self) -> Result<NewArtist, ApiError> {
        let mut check = FieldCheck::new();
        let name = check.required_text("name", self.name);
        let grammy = check.required("grammy", self.grammy);
        let hidden = check.required("hidden", self.hidden);
        check.finish()?;

        match (name, grammy, hidden) {
            (Some(name), Some(grammy), Some(hidden)) => Ok(NewArtist { name, grammy, hidden }),
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateArtistRequest {
    pub name: Option<String>,
    pub grammy: Option<bool>,
    pub hidden: Option<bool>,
}

impl UpdateArtistRequest {
    fn validate(self) -> Result<ArtistPatch, ApiError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ApiError::invalid_input(
                    "Bad Request, Reason: Missing Field(s) - name",
                ));
            }
        }
        Ok(ArtistPatch {
            name: self.name,
            grammy: self.grammy,
            hidden: self.hidden,
        })
    }
}

/// `GET /api/v1/artists`
pub async fn list_artists(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<ArtistListQuery>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadCatalog)?;

    let filter = ArtistFilter {
        grammy: params.grammy,
        hidden: params.hidden,
    };
    let artists = db::list_artists(&pool, &filter, params.limit, params.offset).await?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(artists)?,
        "Artists retrieved successfully.",
    ))
}

/// `GET /api/v1/artists/{id}`
pub async fn get_artist(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadCatalog)?;
    let artist_id = parse_id(&id)?;

    let artist = db::find_artist(&pool, artist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist not found."))?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(artist)?,
        "Artist retrieved successfully.",
    ))
}

/// `POST /api/v1/artists/add-artist`
pub async fn add_artist(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<CreateArtistRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;

    let new = request.validate()?;
    let artist = db::create_artist(&pool, new).await?;

    tracing::info!("artist created: {}", artist.artist_id);

    Ok(ApiSuccess::with_data(
        StatusCode::CREATED,
        json!({ "artist_id": artist.artist_id }),
        "Artist created successfully.",
    ))
}

/// `PUT /api/v1/artists/{id}`
pub async fn update_artist(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateArtistRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;
    let artist_id = parse_id(&id)?;

    let patch = request.validate()?;
    let touched = db::update_artist(&pool, artist_id, &patch).await?;
    if touched == 0 {
        return Err(ApiError::not_found("Artist not found."));
    }

    Ok(ApiSuccess::no_content())
}

/// `DELETE /api/v1/artists/{id}`
pub async fn delete_artist(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteCatalog)?;
    let artist_id = parse_id(&id)?;

    let removed = db::delete_artist(&pool, artist_id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Artist not found."));
    }

    tracing::info!("artist deleted: {artist_id}");

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        json!({ "artist_id": artist_id }),
        "Artist deleted successfully.",
    ))
}
