use chrono::Utc;
use parlor_model::{PageRequest, Person, PersonDraft};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<Person>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM people")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, Person>(
        "SELECT * FROM people ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: PersonDraft) -> Result<Person, CoreError> {
    let now = Utc::now();
    let person = sqlx::query_as::<_, Person>(
        r#"
        INSERT INTO people (id, name, bio, picture, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.name)
    .bind(draft.bio)
    .bind(draft.picture)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(person)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Person, CoreError> {
    sqlx::query_as::<_, Person>("SELECT * FROM people WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: PersonDraft) -> Result<Person, CoreError> {
    sqlx::query_as::<_, Person>(
        r#"
        UPDATE people SET name = $2, bio = $3, picture = $4, updated_at = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.name)
    .bind(draft.bio)
    .bind(draft.picture)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM people WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
