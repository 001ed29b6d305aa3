use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::concerts;
use parlor_model::{Concert, ConcertDraft, PageMeta, PageRequest};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<Concert>>>> {
    let (rows, total) = concerts::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ConcertDraft>,
) -> AppResult<(StatusCode, Json<Envelope<Concert>>)> {
    let concert = concerts::create(&state.pool, draft).await?;
    Ok(envelope::created(concert))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<Concert>>> {
    let concert = concerts::get(&state.pool, id).await?;
    Ok(envelope::success(concert))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ConcertDraft>,
) -> AppResult<Json<Envelope<Concert>>> {
    let concert = concerts::update(&state.pool, id, draft).await?;
    Ok(envelope::success(concert))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    concerts::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
