use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::playlists;
use parlor_model::{PageMeta, PageRequest, Playlist, PlaylistDraft};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<Playlist>>>> {
    let (rows, total) = playlists::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PlaylistDraft>,
) -> AppResult<(StatusCode, Json<Envelope<Playlist>>)> {
    let playlist = playlists::create(&state.pool, draft).await?;
    Ok(envelope::created(playlist))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<Playlist>>> {
    let playlist = playlists::get(&state.pool, id).await?;
    Ok(envelope::success(playlist))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<PlaylistDraft>,
) -> AppResult<Json<Envelope<Playlist>>> {
    let playlist = playlists::update(&state.pool, id, draft).await?;
    Ok(envelope::success(playlist))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    playlists::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
