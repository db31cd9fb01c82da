//! Signup handler for `POST /api/v1/signup`.
//!
//! The first user ever registered becomes Admin; everyone after that is a
//! Viewer. The count and the insert run inside one transaction so two
//! concurrent first signups cannot both become Admin, and the unique email
//! index turns duplicate registrations into a 409.

use axum::extract::State;
use axum::http::StatusCode;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::SignupRequest;
use crate::auth::users::{count_users, create_user, Role};
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::ApiJson;

pub async fn signup(
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<ApiSuccess, ApiError> {
    let (email, password) = request.validate()?;

    let password_hash = hash(&password, DEFAULT_COST)?;

    let mut tx = pool.begin().await?;
    let existing = count_users(&mut *tx).await?;
    let role = if existing == 0 { Role::Admin } else { Role::Viewer };

    let user = create_user(&mut *tx, &email, &password_hash, role)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, "Email already exists."))?;
    tx.commit().await?;

    tracing::info!("user created: {} ({})", user.email, user.role.as_str());

    Ok(ApiSuccess::message(
        StatusCode::CREATED,
        "User created successfully.",
    ))
}
