use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};

use crate::handlers::{
    self, auth, concerts, genres, images, movies, people, playlists, scrape,
    shows, tv, videos,
};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Assemble the full route tree. Reads are public; mutations and scrape
/// routes sit behind the auth middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        // Public authentication endpoints
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // Public catalog reads
        .route("/movies", get(movies::list))
        .route("/movies/{id}", get(movies::get))
        .route("/tv", get(tv::list))
        .route("/tv/{id}", get(tv::get))
        .route("/shows", get(shows::list))
        .route("/shows/{id}", get(shows::get))
        .route("/people", get(people::list))
        .route("/people/{id}", get(people::get))
        .route("/genres", get(genres::list))
        .route("/genres/{id}", get(genres::get))
        .route("/images", get(images::list))
        .route("/images/{id}", get(images::get))
        .route("/videos", get(videos::list))
        .route("/videos/{id}", get(videos::get))
        .route("/playlists", get(playlists::list))
        .route("/playlists/{id}", get(playlists::get))
        .route("/concerts", get(concerts::list))
        .route("/concerts/{id}", get(concerts::get))
        .merge(protected_routes(state.clone()))
        .with_state(state)
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(auth::me))
        // Catalog mutations
        .route("/movies", post(movies::create))
        .route("/movies/{id}", put(movies::update))
        .route("/movies/{id}", delete(movies::delete))
        .route("/tv", post(tv::create))
        .route("/tv/{id}", put(tv::update))
        .route("/tv/{id}", delete(tv::delete))
        .route("/shows", post(shows::create))
        .route("/shows/{id}", put(shows::update))
        .route("/shows/{id}", delete(shows::delete))
        .route("/people", post(people::create))
        .route("/people/{id}", put(people::update))
        .route("/people/{id}", delete(people::delete))
        .route("/genres", post(genres::create))
        .route("/genres/{id}", put(genres::update))
        .route("/genres/{id}", delete(genres::delete))
        .route("/images", post(images::create))
        .route("/images/{id}", put(images::update))
        .route("/images/{id}", delete(images::delete))
        .route("/videos", post(videos::create))
        .route("/videos/{id}", put(videos::update))
        .route("/videos/{id}", delete(videos::delete))
        .route("/playlists", post(playlists::create))
        .route("/playlists/{id}", put(playlists::update))
        .route("/playlists/{id}", delete(playlists::delete))
        .route("/concerts", post(concerts::create))
        .route("/concerts/{id}", put(concerts::update))
        .route("/concerts/{id}", delete(concerts::delete))
        // Scrape routes
        .route("/scrape/movie", get(scrape::movie_detail))
        .route("/scrape/tv", get(scrape::tv_detail))
        .route("/scrape/tv/season", get(scrape::tv_season))
        .route("/scrape/tv/episode", get(scrape::tv_episode))
        .route("/scrape/search", get(scrape::search))
        .route("/scrape/images/movie", get(scrape::movie_images))
        .route("/scrape/images/tv", get(scrape::tv_images))
        .route("/scrape/images/duckduckgo", get(scrape::duckduckgo_images))
        .route("/scrape/images/google", get(scrape::google_images))
        .layer(middleware::from_fn_with_state(state, require_auth))
}
