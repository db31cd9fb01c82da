//! Favorite HTTP handlers.
//!
//! The owning user is always the token bearer; a client-supplied user id
//! is never trusted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::policy::{self, Action};
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::favorites::db::{self, Category};
use crate::middleware::auth::AuthUser;
use crate::validate::{default_limit, parse_id, FieldCheck};

#[derive(Debug, Deserialize)]
pub struct FavoriteListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub category: Option<String>,
    pub item_id: Option<Uuid>,
}

impl AddFavoriteRequest {
    fn validate(self) -> Result<(Category, Uuid), ApiError> {
        let mut check = FieldCheck::new();
        let category = check.required_text("category", self.category);
        let item_id = check.required("item_id", self.item_id);
        check.finish()?;

        match (category, item_id) {
            (Some(category), Some(item_id)) => {
                let category = Category::parse(&category)
                    .ok_or_else(|| ApiError::invalid_input("Bad Request: Invalid category"))?;
                Ok((category, item_id))
            }
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

/// `GET /api/v1/favorites/{category}`
pub async fn list_favorites(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(category): Path<String>,
    ApiQuery(params): ApiQuery<FavoriteListQuery>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ReadFavorites)?;

    let category = Category::parse(&category)
        .ok_or_else(|| ApiError::invalid_input("Bad Request: Invalid category"))?;

    let favorites =
        db::list_favorites(&pool, caller.user_id, category, params.limit, params.offset).await?;

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(favorites)?,
        "Favorites retrieved successfully.",
    ))
}

/// `POST /api/v1/favorites/add-favorite`
pub async fn add_favorite(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<AddFavoriteRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteFavorites)?;

    let (category, item_id) = request.validate()?;

    let favorite = db::create_favorite(&pool, caller.user_id, category, item_id)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, "Favorite already exists."))?;

    tracing::info!("favorite created: {}", favorite.favorite_id);

    Ok(ApiSuccess::with_data(
        StatusCode::CREATED,
        json!({ "favorite_id": favorite.favorite_id }),
        "Favorite added successfully.",
    ))
}

/// `DELETE /api/v1/favorites/remove-favorite/{id}`
pub async fn remove_favorite(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::WriteFavorites)?;
    let favorite_id = parse_id(&id)?;

    let removed = db::delete_favorite(&pool, favorite_id, caller.user_id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Favorite not found."));
    }

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "Favorite removed successfully.",
    ))
}
