//! Handlers for the metadata aggregation and image-search routes.

use axum::Json;
use axum::extract::{Query, State};
use parlor_core::scrape::{
    EpisodeDetail, ImageHit, MovieDetail, SearchHit, SearchKind, SeasonDetail,
    TvDetail,
};
use serde::Deserialize;

use crate::envelope::{self, Envelope};
use crate::errors::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TmdbParams {
    pub tmdb: u64,
}

#[derive(Debug, Deserialize)]
pub struct SeasonParams {
    pub tmdb: u64,
    pub season: u16,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeParams {
    pub tmdb: u64,
    pub season: u16,
    pub episode: u16,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageListParams {
    pub tmdb: u64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageQueryParams {
    pub query: String,
}

pub async fn movie_detail(
    State(state): State<AppState>,
    Query(params): Query<TmdbParams>,
) -> AppResult<Json<Envelope<MovieDetail>>> {
    let detail = state.scrape.metadata.movie_detail(params.tmdb).await?;
    Ok(envelope::success(detail))
}

pub async fn tv_detail(
    State(state): State<AppState>,
    Query(params): Query<TmdbParams>,
) -> AppResult<Json<Envelope<TvDetail>>> {
    let detail = state.scrape.metadata.tv_detail(params.tmdb).await?;
    Ok(envelope::success(detail))
}

pub async fn tv_season(
    State(state): State<AppState>,
    Query(params): Query<SeasonParams>,
) -> AppResult<Json<Envelope<SeasonDetail>>> {
    let season = state
        .scrape
        .metadata
        .season(params.tmdb, params.season)
        .await?;
    Ok(envelope::success(season))
}

pub async fn tv_episode(
    State(state): State<AppState>,
    Query(params): Query<EpisodeParams>,
) -> AppResult<Json<Envelope<EpisodeDetail>>> {
    let episode = state
        .scrape
        .metadata
        .episode(params.tmdb, params.season, params.episode)
        .await?;
    Ok(envelope::success(episode))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Envelope<Vec<SearchHit>>>> {
    let kind = SearchKind::from_query(&params.kind);
    let hits = state.scrape.metadata.search(kind, &params.query).await?;
    Ok(envelope::success(hits))
}

pub async fn movie_images(
    State(state): State<AppState>,
    Query(params): Query<ImageListParams>,
) -> AppResult<Json<Envelope<Vec<ImageHit>>>> {
    let hits = state
        .scrape
        .tmdb_images
        .movie_images(params.tmdb, &params.kind)
        .await?;
    Ok(envelope::success(hits))
}

pub async fn tv_images(
    State(state): State<AppState>,
    Query(params): Query<ImageListParams>,
) -> AppResult<Json<Envelope<Vec<ImageHit>>>> {
    let hits = state
        .scrape
        .tmdb_images
        .tv_images(params.tmdb, &params.kind)
        .await?;
    Ok(envelope::success(hits))
}

pub async fn duckduckgo_images(
    State(state): State<AppState>,
    Query(params): Query<ImageQueryParams>,
) -> AppResult<Json<Envelope<Vec<ImageHit>>>> {
    let hits = state.scrape.duckduckgo.search(&params.query).await?;
    Ok(envelope::success(hits))
}

pub async fn google_images(
    State(state): State<AppState>,
    Query(params): Query<ImageQueryParams>,
) -> AppResult<Json<Envelope<Vec<ImageHit>>>> {
    let hits = state.scrape.google.search(&params.query).await?;
    Ok(envelope::success(hits))
}
