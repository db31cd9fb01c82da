//! User model and database operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

/// User role. Exactly one at a time; the first registered user is Admin,
/// every later signup defaults to Viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "Admin" => Some(Role::Admin),
            "Editor" => Some(Role::Editor),
            "Viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }
}

/// A user record. The password hash is never serialized.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Count all users. Runs on any executor so signup can hold it inside the
/// same transaction as the insert (first-user-Admin must be atomic).
pub async fn count_users<'a, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'a, Database = Sqlite>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(executor)
        .await
}

/// Insert a new user; the unique email index rejects duplicates.
pub async fn create_user<'a, E>(
    executor: E,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error>
where
    E: sqlx::Executor<'a, Database = Sqlite>,
{
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (user_id, email, password_hash, role, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING user_id, email, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_id(pool: &SqlitePool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// List users, optionally filtered by role, in persistence order.
pub async fn list_users(
    pool: &SqlitePool,
    role: Option<Role>,
    limit: i64,
    offset: i64,
) -> Result<Vec<User>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT user_id, email, password_hash, role, created_at, updated_at FROM users WHERE 1=1",
    );
    if let Some(role) = role {
        query.push(" AND role = ").push_bind(role);
    }
    query.push(" LIMIT ").push_bind(limit);
    query.push(" OFFSET ").push_bind(offset);

    query.build_query_as::<User>().fetch_all(pool).await
}

/// Delete a user; returns the number of rows removed.
pub async fn delete_user(pool: &SqlitePool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Replace a user's password hash; returns the number of rows touched.
pub async fn update_password(
    pool: &SqlitePool,
    user_id: Uuid,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE user_id = ?")
        .bind(password_hash)
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
