use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::movies::{self, MovieFilter};
use parlor_model::{Movie, MovieDraft, PageMeta, PageRequest};
use serde::Deserialize;
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Envelope<Vec<Movie>>>> {
    let page = PageRequest {
        page: params.page,
        limit: params.limit,
    };
    let filter = MovieFilter {
        title: params.title,
        genre: params.genre,
    };

    let (rows, total) = movies::list(&state.pool, page, &filter).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<MovieDraft>,
) -> AppResult<(StatusCode, Json<Envelope<Movie>>)> {
    let movie = movies::create(&state.pool, draft).await?;
    Ok(envelope::created(movie))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<Movie>>> {
    let movie = movies::get(&state.pool, id).await?;
    Ok(envelope::success(movie))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<MovieDraft>,
) -> AppResult<Json<Envelope<Movie>>> {
    let movie = movies::update(&state.pool, id, draft).await?;
    Ok(envelope::success(movie))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    movies::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
