use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::genres;
use parlor_model::{Genre, GenreDraft, PageMeta, PageRequest};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<Genre>>>> {
    let (rows, total) = genres::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<GenreDraft>,
) -> AppResult<(StatusCode, Json<Envelope<Genre>>)> {
    let genre = genres::create(&state.pool, draft).await?;
    Ok(envelope::created(genre))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<Genre>>> {
    let genre = genres::get(&state.pool, id).await?;
    Ok(envelope::success(genre))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<GenreDraft>,
) -> AppResult<Json<Envelope<Genre>>> {
    let genre = genres::update(&state.pool, id, draft).await?;
    Ok(envelope::success(genre))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    genres::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
