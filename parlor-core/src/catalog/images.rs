use chrono::Utc;
use parlor_model::{ImageAsset, ImageAssetDraft, PageRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<ImageAsset>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM images")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, ImageAsset>(
        "SELECT * FROM images ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: ImageAssetDraft) -> Result<ImageAsset, CoreError> {
    let now = Utc::now();
    let image = sqlx::query_as::<_, ImageAsset>(
        r#"
        INSERT INTO images (id, kind, keyword, source, path, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.kind)
    .bind(draft.keyword)
    .bind(draft.source)
    .bind(draft.path)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(image)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<ImageAsset, CoreError> {
    sqlx::query_as::<_, ImageAsset>("SELECT * FROM images WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    draft: ImageAssetDraft,
) -> Result<ImageAsset, CoreError> {
    sqlx::query_as::<_, ImageAsset>(
        r#"
        UPDATE images SET kind = $2, keyword = $3, source = $4, path = $5, updated_at = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.kind)
    .bind(draft.keyword)
    .bind(draft.source)
    .bind(draft.path)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM images WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
