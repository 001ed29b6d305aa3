use chrono::Utc;
use parlor_model::{PageRequest, Playlist, PlaylistDraft};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<Playlist>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playlists")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, Playlist>(
        "SELECT * FROM playlists ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: PlaylistDraft) -> Result<Playlist, CoreError> {
    let now = Utc::now();
    let playlist = sqlx::query_as::<_, Playlist>(
        r#"
        INSERT INTO playlists (id, name, description, items, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.name)
    .bind(draft.description)
    .bind(Json(draft.items))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(playlist)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Playlist, CoreError> {
    sqlx::query_as::<_, Playlist>("SELECT * FROM playlists WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: PlaylistDraft) -> Result<Playlist, CoreError> {
    sqlx::query_as::<_, Playlist>(
        r#"
        UPDATE playlists SET name = $2, description = $3, items = $4, updated_at = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.name)
    .bind(draft.description)
    .bind(Json(draft.items))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
