use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::shows;
use parlor_model::{PageMeta, PageRequest, Show, ShowDraft};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<Show>>>> {
    let (rows, total) = shows::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ShowDraft>,
) -> AppResult<(StatusCode, Json<Envelope<Show>>)> {
    let show = shows::create(&state.pool, draft).await?;
    Ok(envelope::created(show))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<Show>>> {
    let show = shows::get(&state.pool, id).await?;
    Ok(envelope::success(show))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ShowDraft>,
) -> AppResult<Json<Envelope<Show>>> {
    let show = shows::update(&state.pool, id, draft).await?;
    Ok(envelope::success(show))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    shows::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
