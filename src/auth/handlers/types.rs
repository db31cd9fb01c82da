//! Request and response types for the auth and user-administration
//! handlers.
//!
//! Request fields are `Option` so missing ones can be collected and reported
//! together through `FieldCheck` instead of failing on the first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::{Role, User};
use crate::error::ApiError;
use crate::validate::FieldCheck;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let mut check = FieldCheck::new();
        let email = check.required_text("email", self.email);
        let password = check.required_text("password", self.password);
        check.finish()?;

        match (email, password) {
            (Some(email), Some(password)) => {
                if !email.contains('@') {
                    return Err(ApiError::invalid_input("Bad Request: Invalid email format"));
                }
                Ok((email, password))
            }
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let mut check = FieldCheck::new();
        let email = check.required_text("email", self.email);
        let password = check.required_text("password", self.password);
        check.finish()?;

        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl AddUserRequest {
    /// Validate shape and resolve the role. Unknown role names are a 400;
    /// `Admin` is a 403 — only the first signup ever mints an Admin.
    pub fn validate(self) -> Result<(String, String, Role), ApiError> {
        let mut check = FieldCheck::new();
        let email = check.required_text("email", self.email);
        let password = check.required_text("password", self.password);
        let role = check.required_text("role", self.role);
        check.finish()?;

        match (email, password, role) {
            (Some(email), Some(password), Some(role)) => {
                let role = Role::parse(&role)
                    .ok_or_else(|| ApiError::invalid_input("Bad Request: Invalid role"))?;
                if role == Role::Admin {
                    return Err(ApiError::forbidden("Forbidden: Invalid role"));
                }
                Ok((email, password, role))
            }
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

impl UpdatePasswordRequest {
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let mut check = FieldCheck::new();
        let old_password = check.required_text("old_password", self.old_password);
        let new_password = check.required_text("new_password", self.new_password);
        check.finish()?;

        match (old_password, new_password) {
            (Some(old_password), Some(new_password)) => Ok((old_password, new_password)),
            _ => Err(ApiError::invalid_input("Bad Request")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    #[serde(default = "crate::validate::default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub role: Option<String>,
}

/// User view returned by the admin listing; never carries the hash.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}
