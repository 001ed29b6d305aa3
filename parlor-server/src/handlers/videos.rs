use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::videos;
use parlor_model::{PageMeta, PageRequest, VideoClip, VideoClipDraft};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<VideoClip>>>> {
    let (rows, total) = videos::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<VideoClipDraft>,
) -> AppResult<(StatusCode, Json<Envelope<VideoClip>>)> {
    let clip = videos::create(&state.pool, draft).await?;
    Ok(envelope::created(clip))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<VideoClip>>> {
    let clip = videos::get(&state.pool, id).await?;
    Ok(envelope::success(clip))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<VideoClipDraft>,
) -> AppResult<Json<Envelope<VideoClip>>> {
    let clip = videos::update(&state.pool, id, draft).await?;
    Ok(envelope::success(clip))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    videos::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
