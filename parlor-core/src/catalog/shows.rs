use chrono::Utc;
use parlor_model::{PageRequest, Show, ShowDraft};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<Show>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, Show>(
        "SELECT * FROM shows ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: ShowDraft) -> Result<Show, CoreError> {
    let now = Utc::now();
    let show = sqlx::query_as::<_, Show>(
        r#"
        INSERT INTO shows (
            id, title, kind, year, released, runtime, genre, director, writer,
            actors, plot, language, country, awards, rated, poster, banner,
            imdb_id, imdb_rating, imdb_votes, website, trailer, player_url,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $24)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.title)
    .bind(draft.kind)
    .bind(draft.year)
    .bind(draft.released)
    .bind(draft.runtime)
    .bind(draft.genre)
    .bind(draft.director)
    .bind(draft.writer)
    .bind(draft.actors)
    .bind(draft.plot)
    .bind(draft.language)
    .bind(draft.country)
    .bind(draft.awards)
    .bind(draft.rated)
    .bind(draft.poster)
    .bind(draft.banner)
    .bind(draft.imdb_id)
    .bind(draft.imdb_rating)
    .bind(draft.imdb_votes)
    .bind(draft.website)
    .bind(draft.trailer)
    .bind(draft.player_url)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(show)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Show, CoreError> {
    sqlx::query_as::<_, Show>("SELECT * FROM shows WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: ShowDraft) -> Result<Show, CoreError> {
    sqlx::query_as::<_, Show>(
        r#"
        UPDATE shows SET
            title = $2, kind = $3, year = $4, released = $5, runtime = $6,
            genre = $7, director = $8, writer = $9, actors = $10, plot = $11,
            language = $12, country = $13, awards = $14, rated = $15,
            poster = $16, banner = $17, imdb_id = $18, imdb_rating = $19,
            imdb_votes = $20, website = $21, trailer = $22, player_url = $23,
            updated_at = $24
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.title)
    .bind(draft.kind)
    .bind(draft.year)
    .bind(draft.released)
    .bind(draft.runtime)
    .bind(draft.genre)
    .bind(draft.director)
    .bind(draft.writer)
    .bind(draft.actors)
    .bind(draft.plot)
    .bind(draft.language)
    .bind(draft.country)
    .bind(draft.awards)
    .bind(draft.rated)
    .bind(draft.poster)
    .bind(draft.banner)
    .bind(draft.imdb_id)
    .bind(draft.imdb_rating)
    .bind(draft.imdb_votes)
    .bind(draft.website)
    .bind(draft.trailer)
    .bind(draft.player_url)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM shows WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
