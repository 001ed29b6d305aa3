use chrono::Utc;
use parlor_model::{Movie, MovieDraft, PageRequest};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::CoreError;

/// Optional list filters; both narrow the result set when present.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
}

const FILTER_CLAUSE: &str = r#"
    ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
AND ($2::text IS NULL OR EXISTS (
        SELECT 1 FROM jsonb_array_elements(genres) AS g
        WHERE g->>'name' = $2
    ))
"#;

pub async fn list(
    pool: &PgPool,
    page: PageRequest,
    filter: &MovieFilter,
) -> Result<(Vec<Movie>, i64), CoreError> {
    let total: i64 =
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM movies WHERE {FILTER_CLAUSE}"))
            .bind(filter.title.as_deref())
            .bind(filter.genre.as_deref())
            .fetch_one(pool)
            .await?;

    let rows = sqlx::query_as::<_, Movie>(&format!(
        "SELECT * FROM movies WHERE {FILTER_CLAUSE} ORDER BY created_at DESC LIMIT $3 OFFSET $4"
    ))
    .bind(filter.title.as_deref())
    .bind(filter.genre.as_deref())
    .bind(i64::from(page.limit()))
    .bind(i64::from(page.offset()))
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

pub async fn create(pool: &PgPool, draft: MovieDraft) -> Result<Movie, CoreError> {
    let now = Utc::now();
    let movie = sqlx::query_as::<_, Movie>(
        r#"
        INSERT INTO movies (
            id, tmdb_id, imdb_id, title, overview, release_date, runtime,
            director, writer, genres, actors, productions, countries,
            languages, banners, posters, videos, player, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $19)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(draft.tmdb_id)
    .bind(draft.imdb_id)
    .bind(draft.title)
    .bind(draft.overview)
    .bind(draft.release_date)
    .bind(draft.runtime)
    .bind(draft.director)
    .bind(draft.writer)
    .bind(Json(draft.genres))
    .bind(Json(draft.actors))
    .bind(Json(draft.productions))
    .bind(Json(draft.countries))
    .bind(Json(draft.languages))
    .bind(Json(draft.banners))
    .bind(Json(draft.posters))
    .bind(Json(draft.videos))
    .bind(draft.player.map(Json))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(movie)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Movie, CoreError> {
    sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CoreError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, draft: MovieDraft) -> Result<Movie, CoreError> {
    sqlx::query_as::<_, Movie>(
        r#"
        UPDATE movies SET
            tmdb_id = $2, imdb_id = $3, title = $4, overview = $5,
            release_date = $6, runtime = $7, director = $8, writer = $9,
            genres = $10, actors = $11, productions = $12, countries = $13,
            languages = $14, banners = $15, posters = $16, videos = $17,
            player = $18, updated_at = $19
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(draft.tmdb_id)
    .bind(draft.imdb_id)
    .bind(draft.title)
    .bind(draft.overview)
    .bind(draft.release_date)
    .bind(draft.runtime)
    .bind(draft.director)
    .bind(draft.writer)
    .bind(Json(draft.genres))
    .bind(Json(draft.actors))
    .bind(Json(draft.productions))
    .bind(Json(draft.countries))
    .bind(Json(draft.languages))
    .bind(Json(draft.banners))
    .bind(Json(draft.posters))
    .bind(Json(draft.videos))
    .bind(draft.player.map(Json))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?
    .ok_or(CoreError::NotFound)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CoreError> {
    let result = sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound);
    }
    Ok(())
}
