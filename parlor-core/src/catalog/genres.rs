use chrono::Utc;
use parlor_model::{Genre, GenreDraft, PageRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<Genre>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
        .fetch_one(pool)
        .await?;

    let rows =
        sqlx::query_as::<_, Genre>("SELECT * FROM genres ORDER BY name LIMIT $1 OFFSET $2")
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(pool)
            .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: GenreDraft) -> Result<Genre, CoreError> {
    let now = Utc::now();
    let genre = sqlx::query_as::<_, Genre>(
        r#"
        INSERT INTO genres (id, name, created_at, updated_at)
        VALUES ($1, $2, $3, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(genre)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Genre, CoreError> {
    sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: GenreDraft) -> Result<Genre, CoreError> {
    sqlx::query_as::<_, Genre>(
        "UPDATE genres SET name = $2, updated_at = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(draft.name)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM genres WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
