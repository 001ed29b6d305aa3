use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use parlor_core::catalog::people;
use parlor_model::{PageMeta, PageRequest, Person, PersonDraft};
use uuid::Uuid;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<Json<Envelope<Vec<Person>>>> {
    let (rows, total) = people::list(&state.pool, page).await?;
    Ok(envelope::success_with_meta(PageMeta::new(page, total), rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PersonDraft>,
) -> AppResult<(StatusCode, Json<Envelope<Person>>)> {
    let person = people::create(&state.pool, draft).await?;
    Ok(envelope::created(person))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<Person>>> {
    let person = people::get(&state.pool, id).await?;
    Ok(envelope::success(person))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<PersonDraft>,
) -> AppResult<Json<Envelope<Person>>> {
    let person = people::update(&state.pool, id, draft).await?;
    Ok(envelope::success(person))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    people::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
