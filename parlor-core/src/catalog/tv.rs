use chrono::Utc;
use parlor_model::{PageRequest, TvShow, TvShowDraft};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::CoreError;

pub async fn list(pool: &PgPool, page: PageRequest) -> Result<(Vec<TvShow>, i64), CoreError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tv_shows")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, TvShow>(
        "SELECT * FROM tv_shows ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: TvShowDraft) -> Result<TvShow, CoreError> {
    let now = Utc::now();
    let show = sqlx::query_as::<_, TvShow>(
        r#"
        INSERT INTO tv_shows (
            id, tmdb_id, name, overview, first_air_date, episode_count,
            season_count, seasons, genres, actors, creators, networks,
            productions, countries, banners, posters, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $17)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.tmdb_id)
    .bind(draft.name)
    .bind(draft.overview)
    .bind(draft.first_air_date)
    .bind(draft.episode_count)
    .bind(draft.season_count)
    .bind(Json(draft.seasons))
    .bind(Json(draft.genres))
    .bind(Json(draft.actors))
    .bind(Json(draft.creators))
    .bind(Json(draft.networks))
    .bind(Json(draft.productions))
    .bind(Json(draft.countries))
    .bind(Json(draft.banners))
    .bind(Json(draft.posters))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(show)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<TvShow, CoreError> {
    sqlx::query_as::<_, TvShow>("SELECT * FROM tv_shows WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: TvShowDraft) -> Result<TvShow, CoreError> {
    sqlx::query_as::<_, TvShow>(
        r#"
        UPDATE tv_shows SET
            tmdb_id = $2, name = $3, overview = $4, first_air_date = $5,
            episode_count = $6, season_count = $7, seasons = $8, genres = $9,
            actors = $10, creators = $11, networks = $12, productions = $13,
            countries = $14, banners = $15, posters = $16, updated_at = $17
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.tmdb_id)
    .bind(draft.name)
    .bind(draft.overview)
    .bind(draft.first_air_date)
    .bind(draft.episode_count)
    .bind(draft.season_count)
    .bind(Json(draft.seasons))
    .bind(Json(draft.genres))
    .bind(Json(draft.actors))
    .bind(Json(draft.creators))
    .bind(Json(draft.networks))
    .bind(Json(draft.productions))
    .bind(Json(draft.countries))
    .bind(Json(draft.banners))
    .bind(Json(draft.posters))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM tv_shows WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
