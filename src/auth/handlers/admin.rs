//! User administration handlers (Admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{AddUserRequest, UserListQuery, UserView};
use crate::auth::policy::{self, Action};
use crate::auth::users::{self, Role};
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::validate::parse_id;

/// `GET /api/v1/users` — list users with an optional role filter.
pub async fn list_users(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<UserListQuery>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ManageUsers)?;

    let role = match params.role.as_deref() {
        Some(raw) => Some(
            Role::parse(raw)
                .ok_or_else(|| ApiError::invalid_input("Bad Request: Invalid role parameter"))?,
        ),
        None => None,
    };

    let users = users::list_users(&pool, role, params.limit, params.offset).await?;
    let views: Vec<UserView> = users.iter().map(UserView::from).collect();

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        serde_json::to_value(views)?,
        "Users retrieved successfully.",
    ))
}

/// `POST /api/v1/users/add-user` — create an Editor or Viewer account.
pub async fn add_user(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<AddUserRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ManageUsers)?;

    let (email, password, role) = request.validate()?;
    let password_hash = hash(&password, DEFAULT_COST)?;

    let user = users::create_user(&pool, &email, &password_hash, role)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, "Conflict: Email already exists"))?;

    tracing::info!("user added by admin {}: {}", caller.user_id, user.user_id);

    Ok(ApiSuccess::message(
        StatusCode::CREATED,
        "User created successfully.",
    ))
}

/// `DELETE /api/v1/users/{id}` — remove an account. Admin accounts can
/// never be deleted, not even by another Admin.
pub async fn delete_user(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::ManageUsers)?;
    let user_id = parse_id(&id)?;

    let target = users::get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !policy::can_delete_user(target.role) {
        return Err(ApiError::forbidden("Forbidden: Cannot delete another admin"));
    }

    users::delete_user(&pool, user_id).await?;
    tracing::info!("user deleted by admin {}: {}", caller.user_id, user_id);

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "User deleted successfully",
    ))
}
