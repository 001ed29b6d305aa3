use chrono::Utc;
use parlor_model::User;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::CoreError;

/// Fields required to register a new user. The hash arrives pre-computed;
/// this module never sees a plaintext password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password_hash: String,
}

pub async fn create(pool: &PgPool, new_user: NewUser) -> Result<User, CoreError> {
    let now = Utc::now();
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, name, role, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_user.username)
    .bind(new_user.email)
    .bind(new_user.name)
    .bind(new_user.role)
    .bind(new_user.password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, CoreError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<User, CoreError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}
