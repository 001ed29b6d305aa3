//! HTTP-level tests for the aggregation subsystem, with providers played by
//! a local mock server.

use std::time::Duration;

use parlor_core::scrape::{
    Aggregator, DuckDuckGoImageSearch, OmdbClient, ProviderError, SearchKind,
    TmdbClient, TmdbImageSearch, UpstreamClient,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn client() -> UpstreamClient {
    UpstreamClient::new(TIMEOUT).expect("client construction failed")
}

fn aggregator(server: &MockServer) -> Aggregator {
    let tmdb = TmdbClient::with_base_url(client(), "tmdb-key", server.uri());
    let omdb = OmdbClient::with_base_url(client(), "omdb-key", server.uri());
    Aggregator::new(tmdb, omdb)
}

fn matrix_detail_body() -> serde_json::Value {
    json!({
        "id": 603,
        "imdb_id": "tt0133093",
        "title": "The Matrix",
        "overview": "A computer hacker learns the truth.",
        "release_date": "1999-03-30",
        "runtime": 136,
        "poster_path": "/matrix.jpg",
        "backdrop_path": "/matrix-b.jpg",
        "genres": [{"id": 28, "name": "Action"}],
        "credits": {
            "cast": (0..15).map(|i| json!({
                "id": i, "name": format!("Actor {i}"), "character": "", "order": i
            })).collect::<Vec<_>>(),
            "crew": [
                {"id": 100, "name": "Lana Wachowski", "job": "Director", "department": "Directing"},
                {"id": 101, "name": "Joel Silver", "job": "Producer", "department": "Production"},
                {"id": 102, "name": "Lilly Wachowski", "job": "Writer", "department": "Writing"}
            ]
        },
        "videos": {"results": [
            {"key": "vKQi3bBA1y8", "site": "YouTube", "type": "Trailer", "name": "Official", "size": 1080}
        ]}
    })
}

#[tokio::test]
async fn movie_detail_merges_primary_and_secondary_sources() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("append_to_response", "credits,videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(matrix_detail_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("i", "tt0133093"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "The Matrix",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Awards": "Won 4 Oscars.",
            "imdbRating": "8.7",
            "Response": "True"
        })))
        .mount(&server)
        .await;

    let detail = aggregator(&server).movie_detail(603).await.unwrap();

    assert_eq!(detail.title, "The Matrix");
    assert_eq!(detail.runtime, 136);
    assert_eq!(detail.cast.len(), 10);
    assert_eq!(detail.cast[0].name, "Actor 0");
    assert_eq!(detail.crew.len(), 2);
    assert!(detail.crew.iter().all(|c| c.job == "Director" || c.job == "Writer"));
    assert_eq!(detail.rating, Some(8.7));
    assert_eq!(detail.awards.as_deref(), Some("Won 4 Oscars."));
    assert_eq!(
        detail.director.as_deref(),
        Some("Lana Wachowski, Lilly Wachowski")
    );
}

#[tokio::test]
async fn secondary_failure_degrades_without_failing_the_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(matrix_detail_body()))
        .mount(&server)
        .await;

    // The ratings provider is down.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let detail = aggregator(&server).movie_detail(603).await.unwrap();

    assert_eq!(detail.title, "The Matrix");
    assert_eq!(detail.rating, None);
    assert_eq!(detail.awards, None);
    assert_eq!(detail.director, None);
}

#[tokio::test]
async fn unparseable_secondary_rating_is_dropped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(matrix_detail_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Director": "Lana Wachowski, Lilly Wachowski",
            "imdbRating": "N/A",
            "Response": "True"
        })))
        .mount(&server)
        .await;

    let detail = aggregator(&server).movie_detail(603).await.unwrap();

    assert_eq!(detail.rating, None);
    assert!(detail.director.is_some());
    assert_eq!(detail.title, "The Matrix");
}

#[tokio::test]
async fn primary_failure_fails_the_whole_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = aggregator(&server).movie_detail(603).await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 500, .. }));
}

#[tokio::test]
async fn primary_timeout_fails_the_whole_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(matrix_detail_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let tmdb = TmdbClient::with_base_url(
        UpstreamClient::new(Duration::from_millis(200)).unwrap(),
        "tmdb-key",
        server.uri(),
    );
    let omdb = OmdbClient::with_base_url(client(), "omdb-key", server.uri());

    let err = Aggregator::new(tmdb, omdb).movie_detail(603).await.unwrap_err();
    assert!(matches!(err, ProviderError::Fetch(_)));
}

#[tokio::test]
async fn missing_movie_surfaces_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let err = aggregator(&server).movie_detail(999_999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn tv_detail_survives_auxiliary_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tv/1399"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1399,
            "name": "Game of Thrones",
            "overview": "Seven noble families...",
            "first_air_date": "2011-04-17",
            "number_of_episodes": 73,
            "number_of_seasons": 8,
            "seasons": [
                {"air_date": "2011-04-17", "episode_count": 10, "name": "Season 1", "season_number": 1}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tv/1399/credits"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tv/1399/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1399,
            "results": [{"key": "KPLWWIOCOOQ", "site": "YouTube", "type": "Trailer"}]
        })))
        .mount(&server)
        .await;

    let detail = aggregator(&server).tv_detail(1399).await.unwrap();

    assert_eq!(detail.name, "Game of Thrones");
    assert!(detail.cast.is_empty());
    assert_eq!(detail.videos.len(), 1);
    assert_eq!(detail.seasons.len(), 1);
}

#[tokio::test]
async fn missing_season_is_not_found_not_a_default_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tv/1399/season/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let err = aggregator(&server).season(1399, 42).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn season_lookup_passes_through_episode_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tv/1399/season/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "air_date": "2011-04-17",
            "name": "Season 1",
            "season_number": 1,
            "poster_path": "/s1.jpg",
            "episodes": [
                {"air_date": "2011-04-17", "episode_number": 1, "season_number": 1,
                 "name": "Winter Is Coming", "still_path": "/e1.jpg"},
                {"air_date": "2011-04-24", "episode_number": 2, "season_number": 1,
                 "name": "The Kingsroad", "still_path": null}
            ]
        })))
        .mount(&server)
        .await;

    let season = aggregator(&server).season(1399, 1).await.unwrap();

    assert_eq!(season.season_number, 1);
    assert_eq!(season.episodes.len(), 2);
    assert_eq!(season.episodes[0].name, "Winter Is Coming");
    assert!(season.episodes[1].still.is_none());
}

#[tokio::test]
async fn search_defaults_to_movies_and_normalizes_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "poster_path": "/m.jpg",
                 "backdrop_path": "/mb.jpg", "release_date": "1999-03-30"},
                {"id": 604, "title": "The Matrix Reloaded", "poster_path": null,
                 "release_date": "2003-05-15"}
            ],
            "total_results": 2
        })))
        .mount(&server)
        .await;

    let hits = aggregator(&server)
        .search(SearchKind::from_query("anything"), "matrix")
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].tmdb_id, 603);
    assert!(hits[0].poster.as_deref().unwrap().ends_with("/m.jpg"));
    assert!(hits[1].poster.is_none());
}

#[tokio::test]
async fn structured_image_search_maps_paths_through_templates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "backdrops": [{"file_path": "/b1.jpg"}, {"file_path": "/b2.jpg"}],
            "posters": [{"file_path": "/p1.jpg"}]
        })))
        .mount(&server)
        .await;

    let search =
        TmdbImageSearch::new(TmdbClient::with_base_url(client(), "tmdb-key", server.uri()));

    let banners = search.movie_images(603, "banners").await.unwrap();
    assert_eq!(banners.len(), 2);
    assert_eq!(
        banners[0].thumbnail,
        "https://image.tmdb.org/t/p/w500_and_h282_face/b1.jpg"
    );
    assert_eq!(banners[0].image, "https://image.tmdb.org/t/p/original/b1.jpg");

    // Unknown kinds short-circuit to an empty list without a fetch.
    let unknown = search.movie_images(603, "stills").await.unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn duckduckgo_extracts_session_then_fetches_results() {
    let server = MockServer::start().await;

    let html =
        "<html><body><script>var u='/d.js?q=the+matrix&l=us-en&vqd=3-42424242&p=1';</script></body></html>";
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/i.js"))
        .and(query_param("vqd", "3-42424242"))
        .and(query_param("q", "the+matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"thumbnail": "https://t.example/1.jpg", "image": "https://i.example/1.jpg",
                 "title": "one", "url": "https://p.example/1", "width": 800, "height": 600}
            ]
        })))
        .mount(&server)
        .await;

    let search = DuckDuckGoImageSearch::with_base_url(client(), server.uri());
    let hits = search.search("the matrix").await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].thumbnail, "https://t.example/1.jpg");
    assert_eq!(hits[0].image, "https://i.example/1.jpg");
}

#[tokio::test]
async fn duckduckgo_proceeds_with_empty_session_when_extraction_misses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>nothing here</body></html>"),
        )
        .mount(&server)
        .await;

    // The endpoint is still called, with empty token and query.
    Mock::given(method("GET"))
        .and(path("/i.js"))
        .and(query_param("vqd", ""))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let search = DuckDuckGoImageSearch::with_base_url(client(), server.uri());
    let hits = search.search("anything").await.unwrap();
    assert!(hits.is_empty());
}
