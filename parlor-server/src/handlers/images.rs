use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::images;
use parlor_model::{ImageAsset, ImageAssetDraft, PageMeta, PageRequest};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<ImageAsset>>>> {
    let (rows, total) = images::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ImageAssetDraft>,
) -> AppResult<(StatusCode, Json<Envelope<ImageAsset>>)> {
    let image = images::create(&state.pool, draft).await?;
    Ok(envelope::created(image))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<ImageAsset>>> {
    let image = images::get(&state.pool, id).await?;
    Ok(envelope::success(image))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ImageAssetDraft>,
) -> AppResult<Json<Envelope<ImageAsset>>> {
    let image = images::update(&state.pool, id, draft).await?;
    Ok(envelope::success(image))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    images::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
