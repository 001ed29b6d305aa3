use chrono::Utc;
use parlor_model::{Concert, ConcertDraft, PageRequest};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<Concert>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM concerts")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, Concert>(
        "SELECT * FROM concerts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: ConcertDraft) -> Result<Concert, CoreError> {
    let now = Utc::now();
    let concert = sqlx::query_as::<_, Concert>(
        r#"
        INSERT INTO concerts (
            id, title, concert_date, release_date, place, overview, setlist,
            artist, banners, videos, player, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.title)
    .bind(draft.concert_date)
    .bind(draft.release_date)
    .bind(draft.place)
    .bind(draft.overview)
    .bind(draft.setlist)
    .bind(Json(draft.artist))
    .bind(Json(draft.banners))
    .bind(Json(draft.videos))
    .bind(draft.player.map(Json))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(concert)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Concert, CoreError> {
    sqlx::query_as::<_, Concert>("SELECT * FROM concerts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: ConcertDraft) -> Result<Concert, CoreError> {
    sqlx::query_as::<_, Concert>(
        r#"
        UPDATE concerts SET
            title = $2, concert_date = $3, release_date = $4, place = $5,
            overview = $6, setlist = $7, artist = $8, banners = $9,
            videos = $10, player = $11, updated_at = $12
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.title)
    .bind(draft.concert_date)
    .bind(draft.release_date)
    .bind(draft.place)
    .bind(draft.overview)
    .bind(draft.setlist)
    .bind(Json(draft.artist))
    .bind(Json(draft.banners))
    .bind(Json(draft.videos))
    .bind(draft.player.map(Json))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM concerts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
