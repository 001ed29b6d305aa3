use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use parlor_core::auth::{hash_password, issue_token, verify_password};
use parlor_core::catalog::users::{self, NewUser};
use parlor_model::User;
use serde::{Deserialize, Serialize};

use crate::envelope::{self, Envelope};
use crate::errors::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    pub password: String,
}

fn default_role() -> String {
    "member".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Envelope<User>>)> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(AppError::bad_request("username and password are required"));
    }

    let password_hash = hash_password(&request.password)?;
    let user = users::create(
        &state.pool,
        NewUser {
            username: request.username,
            email: request.email,
            name: request.name,
            role: request.role,
            password_hash,
        },
    )
    .await?;

    Ok(envelope::created(user))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<Envelope<LoginResponse>>> {
    let user = users::find_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| AppError::unauthorized("wrong username"))?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::unauthorized("wrong password"));
    }

    let token = issue_token(state.jwt_secret(), &user)?;
    Ok(envelope::success(LoginResponse { token, user }))
}

/// Details of the authenticated caller.
pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Envelope<User>>> {
    let user = users::get(&state.pool, auth_user.id).await?;
    Ok(envelope::success(user))
}
