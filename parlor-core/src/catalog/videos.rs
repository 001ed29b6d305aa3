use chrono::Utc;
use parlor_model::{PageRequest, VideoClip, VideoClipDraft};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<VideoClip>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, VideoClip>(
        "SELECT * FROM videos ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: VideoClipDraft) -> Result<VideoClip, CoreError> {
    let now = Utc::now();
    let clip = sqlx::query_as::<_, VideoClip>(
        r#"
        INSERT INTO videos (id, kind, source, url, owner_id, owner_kind, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.kind)
    .bind(draft.source)
    .bind(draft.url)
    .bind(draft.owner_id)
    .bind(draft.owner_kind)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(clip)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<VideoClip, CoreError> {
    sqlx::query_as::<_, VideoClip>("SELECT * FROM videos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: VideoClipDraft) -> Result<VideoClip, CoreError> {
    sqlx::query_as::<_, VideoClip>(
        r#"
        UPDATE videos SET kind = $2, source = $3, url = $4, owner_id = $5,
            owner_kind = $6, updated_at = $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.kind)
    .bind(draft.source)
    .bind(draft.url)
    .bind(draft.owner_id)
    .bind(draft.owner_kind)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM videos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
