//! Password change handler for `PUT /api/v1/users/update-password`.

use axum::extract::State;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::UpdatePasswordRequest;
use crate::auth::policy::{self, Action};
use crate::auth::users;
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;

/// Any authenticated role may change its own password, after re-proving
/// the old one.
pub async fn update_password(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<UpdatePasswordRequest>,
) -> Result<ApiSuccess, ApiError> {
    policy::require(caller.role, Action::UpdateOwnPassword)?;

    let (old_password, new_password) = request.validate()?;

    let user = users::get_user_by_id(&pool, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !verify(&old_password, &user.password_hash)? {
        return Err(ApiError::forbidden("Forbidden: Old password is incorrect"));
    }

    let password_hash = hash(&new_password, DEFAULT_COST)?;
    users::update_password(&pool, caller.user_id, &password_hash).await?;

    tracing::info!("password updated for {}", caller.user_id);

    Ok(ApiSuccess::no_content())
}
