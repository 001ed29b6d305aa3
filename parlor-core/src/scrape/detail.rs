//! The aggregator: merges provider responses into normalized detail records.
//!
//! One primary fetch decides the fate of the whole lookup; auxiliary and
//! secondary fetches only ever add fields. The overlay is commutative, so
//! auxiliary ordering does not matter.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ProviderError;
use super::omdb::{OmdbClient, OmdbRecord};
use super::tmdb::types::{
    Credits, EpisodeDetails, MovieDetails, SeasonDetails, TvDetails, VideoList,
};
use super::tmdb::{SearchKind, TmdbClient};
use super::urls::{ORIGINAL, POSTER_DETAIL, image_url_opt};
use parlor_model::refs::{CountryRef, NetworkRef, ProductionRef};

/// Cast entries kept on a normalized record, in provider billing order.
const MAX_CAST: usize = 10;

/// Crew jobs worth keeping; anything else is dropped entirely.
const CREW_JOBS: [&str; 2] = ["Director", "Writer"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    pub name: String,
    pub character: String,
    pub order: i32,
    pub profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewCredit {
    pub name: String,
    pub job: String,
    pub profile: Option<String>,
}

/// An externally hosted video reference (trailer, teaser, clip).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoLink {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The canonical merged movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub tmdb_id: u64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub runtime: u32,
    pub language: String,
    pub website: String,
    pub genres: Vec<String>,
    pub productions: Vec<ProductionRef>,
    pub countries: Vec<CountryRef>,
    pub poster: Option<String>,
    pub banner: Option<String>,
    pub cast: Vec<CastCredit>,
    pub crew: Vec<CrewCredit>,
    pub videos: Vec<VideoLink>,
    /// Secondary-source overlay; unset whenever that fetch fails or the
    /// rating string does not parse.
    pub director: Option<String>,
    pub awards: Option<String>,
    pub rating: Option<f32>,
}

/// The canonical merged TV series record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvDetail {
    pub tmdb_id: u64,
    pub name: String,
    pub overview: String,
    pub first_air_date: String,
    pub episode_count: i32,
    pub season_count: i32,
    pub episode_run_time: Option<u32>,
    pub origin_country: Vec<String>,
    pub genres: Vec<String>,
    pub networks: Vec<NetworkRef>,
    pub creators: Vec<String>,
    pub productions: Vec<ProductionRef>,
    pub seasons: Vec<SeasonSummary>,
    pub poster: Option<String>,
    pub banner: Option<String>,
    /// Auxiliary overlays; empty when the credits/videos fetches fail.
    pub cast: Vec<String>,
    pub videos: Vec<VideoLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub air_date: String,
    pub episode_count: i32,
    pub name: String,
    pub overview: String,
    pub season_number: i32,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDetail {
    pub air_date: String,
    pub name: String,
    pub overview: String,
    pub season_number: i32,
    pub poster: Option<String>,
    pub episodes: Vec<EpisodeDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    pub air_date: String,
    pub episode_number: i32,
    pub season_number: i32,
    pub name: String,
    pub overview: String,
    pub still: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub tmdb_id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub poster: Option<String>,
    pub banner: Option<String>,
}

/// Orchestrates provider calls for one logical entity and merges the
/// results. Stateless; every lookup is independent.
#[derive(Debug)]
pub struct Aggregator {
    tmdb: TmdbClient,
    omdb: OmdbClient,
}

impl Aggregator {
    pub fn new(tmdb: TmdbClient, omdb: OmdbClient) -> Self {
        Self { tmdb, omdb }
    }

    /// Movie lookup. The primary fetch (detail with credits and videos
    /// appended) is required; the secondary ratings fetch is an overlay
    /// that may fail without failing the lookup.
    pub async fn movie_detail(&self, tmdb_id: u64) -> Result<MovieDetail, ProviderError> {
        let raw = self.tmdb.movie(tmdb_id).await?;
        let mut detail = normalize_movie(raw);

        if let Some(imdb_id) = detail.imdb_id.clone() {
            match self.omdb.by_imdb_id(&imdb_id).await {
                Ok(record) => overlay_ratings(&mut detail, &record),
                Err(err) => {
                    warn!(tmdb_id, %imdb_id, error = %err, "secondary ratings fetch failed, returning primary fields only");
                }
            }
        }

        Ok(detail)
    }

    /// Series lookup. Credits and videos are fetched concurrently and are
    /// each independently recoverable.
    pub async fn tv_detail(&self, tmdb_id: u64) -> Result<TvDetail, ProviderError> {
        let raw = self.tmdb.tv(tmdb_id).await?;

        let (credits, videos) =
            tokio::join!(self.tmdb.tv_credits(tmdb_id), self.tmdb.tv_videos(tmdb_id));
        let credits = credits
            .map_err(|err| warn!(tmdb_id, error = %err, "series credits fetch failed"))
            .ok();
        let videos = videos
            .map_err(|err| warn!(tmdb_id, error = %err, "series videos fetch failed"))
            .ok();

        Ok(normalize_tv(raw, credits, videos))
    }

    /// Season lookup: single fetch, rename-only normalization. A missing
    /// season surfaces as [`ProviderError::NotFound`].
    pub async fn season(&self, tmdb_id: u64, season: u16) -> Result<SeasonDetail, ProviderError> {
        let raw = self.tmdb.season(tmdb_id, season).await?;
        Ok(normalize_season(raw))
    }

    /// Episode lookup, same contract as [`Aggregator::season`].
    pub async fn episode(
        &self,
        tmdb_id: u64,
        season: u16,
        episode: u16,
    ) -> Result<EpisodeDetail, ProviderError> {
        let raw = self.tmdb.episode(tmdb_id, season, episode).await?;
        Ok(normalize_episode(raw))
    }

    pub async fn search(
        &self,
        kind: SearchKind,
        query: &str,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let page = self.tmdb.search(kind, query).await?;
        Ok(page
            .results
            .into_iter()
            .map(|entry| SearchHit {
                tmdb_id: entry.id,
                title: if entry.title.is_empty() {
                    entry.name
                } else {
                    entry.title
                },
                overview: entry.overview,
                release_date: if entry.release_date.is_empty() {
                    entry.first_air_date
                } else {
                    entry.release_date
                },
                poster: image_url_opt(POSTER_DETAIL, entry.poster_path.as_deref()),
                banner: image_url_opt(ORIGINAL, entry.backdrop_path.as_deref()),
            })
            .collect())
    }
}

pub(crate) fn normalize_movie(raw: MovieDetails) -> MovieDetail {
    MovieDetail {
        tmdb_id: raw.id,
        imdb_id: raw.imdb_id.filter(|id| !id.is_empty()),
        title: raw.title,
        overview: raw.overview,
        release_date: raw.release_date,
        runtime: raw.runtime.unwrap_or(0),
        language: raw.original_language,
        website: raw.homepage,
        genres: raw.genres.into_iter().map(|g| g.name).collect(),
        productions: raw
            .production_companies
            .into_iter()
            .map(|c| ProductionRef {
                name: c.name,
                origin_country: c.origin_country,
            })
            .collect(),
        countries: raw
            .production_countries
            .into_iter()
            .map(|c| CountryRef {
                code: c.iso_3166_1,
                name: c.name,
            })
            .collect(),
        poster: image_url_opt(POSTER_DETAIL, raw.poster_path.as_deref()),
        banner: image_url_opt(ORIGINAL, raw.backdrop_path.as_deref()),
        cast: cap_cast(raw.credits.cast),
        crew: filter_crew(raw.credits.crew),
        videos: video_links(raw.videos),
        director: None,
        awards: None,
        rating: None,
    }
}

/// Overlay secondary-source fields. Only values that exist and parse make
/// it onto the record; a dropped value leaves the field unset.
pub(crate) fn overlay_ratings(detail: &mut MovieDetail, record: &OmdbRecord) {
    if !record.director.is_empty() {
        detail.director = Some(record.director.clone());
    }
    if !record.awards.is_empty() {
        detail.awards = Some(record.awards.clone());
    }
    detail.rating = parse_rating(&record.imdb_rating);
}

/// A rating string must parse as a finite float to be kept. "N/A" and
/// friends are dropped, never propagated as zero.
pub(crate) fn parse_rating(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|r| r.is_finite())
}

fn cap_cast(cast: Vec<super::tmdb::types::CastEntry>) -> Vec<CastCredit> {
    cast.into_iter()
        .take(MAX_CAST)
        .map(|member| CastCredit {
            name: member.name,
            character: member.character,
            order: member.order,
            profile: member.profile_path.filter(|p| !p.is_empty()),
        })
        .collect()
}

fn filter_crew(crew: Vec<super::tmdb::types::CrewEntry>) -> Vec<CrewCredit> {
    crew.into_iter()
        .filter(|member| CREW_JOBS.contains(&member.job.as_str()))
        .map(|member| CrewCredit {
            name: member.name,
            job: member.job,
            profile: member.profile_path.filter(|p| !p.is_empty()),
        })
        .collect()
}

fn video_links(videos: VideoList) -> Vec<VideoLink> {
    videos
        .results
        .into_iter()
        .map(|video| VideoLink {
            key: video.key,
            site: video.site,
            kind: video.kind,
        })
        .collect()
}

pub(crate) fn normalize_tv(
    raw: TvDetails,
    credits: Option<Credits>,
    videos: Option<VideoList>,
) -> TvDetail {
    TvDetail {
        tmdb_id: raw.id,
        name: raw.name,
        overview: raw.overview,
        first_air_date: raw.first_air_date,
        episode_count: raw.number_of_episodes,
        season_count: raw.number_of_seasons,
        episode_run_time: raw.episode_run_time.first().copied(),
        origin_country: raw.origin_country,
        genres: raw.genres.into_iter().map(|g| g.name).collect(),
        networks: raw
            .networks
            .into_iter()
            .map(|n| NetworkRef {
                name: n.name,
                country: n.origin_country,
            })
            .collect(),
        creators: raw.created_by.into_iter().map(|c| c.name).collect(),
        productions: raw
            .production_companies
            .into_iter()
            .map(|c| ProductionRef {
                name: c.name,
                origin_country: c.origin_country,
            })
            .collect(),
        seasons: raw
            .seasons
            .into_iter()
            .map(|season| SeasonSummary {
                air_date: season.air_date,
                episode_count: season.episode_count,
                name: season.name,
                overview: season.overview,
                season_number: season.season_number,
                poster: image_url_opt(POSTER_DETAIL, season.poster_path.as_deref()),
            })
            .collect(),
        poster: image_url_opt(POSTER_DETAIL, raw.poster_path.as_deref()),
        banner: image_url_opt(ORIGINAL, raw.backdrop_path.as_deref()),
        cast: credits
            .map(|c| c.cast.into_iter().map(|member| member.name).collect())
            .unwrap_or_default(),
        videos: videos.map(video_links).unwrap_or_default(),
    }
}

pub(crate) fn normalize_season(raw: SeasonDetails) -> SeasonDetail {
    SeasonDetail {
        air_date: raw.air_date,
        name: raw.name,
        overview: raw.overview,
        season_number: raw.season_number,
        poster: image_url_opt(POSTER_DETAIL, raw.poster_path.as_deref()),
        episodes: raw.episodes.into_iter().map(normalize_episode).collect(),
    }
}

pub(crate) fn normalize_episode(raw: EpisodeDetails) -> EpisodeDetail {
    EpisodeDetail {
        air_date: raw.air_date,
        episode_number: raw.episode_number,
        season_number: raw.season_number,
        name: raw.name,
        overview: raw.overview,
        still: image_url_opt(ORIGINAL, raw.still_path.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie_with_credits(cast_len: usize, crew_jobs: &[&str]) -> MovieDetails {
        let cast: Vec<_> = (0..cast_len)
            .map(|i| {
                json!({
                    "id": i,
                    "name": format!("Actor {i}"),
                    "character": format!("Role {i}"),
                    "order": i,
                })
            })
            .collect();
        let crew: Vec<_> = crew_jobs
            .iter()
            .enumerate()
            .map(|(i, job)| {
                json!({
                    "id": 100 + i,
                    "name": format!("Crew {i}"),
                    "job": job,
                    "department": "Production",
                })
            })
            .collect();

        serde_json::from_value(json!({
            "id": 603,
            "imdb_id": "tt0133093",
            "title": "The Matrix",
            "overview": "A computer hacker learns the truth.",
            "runtime": 136,
            "release_date": "1999-03-30",
            "poster_path": "/matrix.jpg",
            "backdrop_path": "/matrix-backdrop.jpg",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "credits": {"cast": cast, "crew": crew},
            "videos": {"results": [
                {"key": "vKQi3bBA1y8", "site": "YouTube", "type": "Trailer", "name": "Official"}
            ]},
        }))
        .unwrap()
    }

    #[test]
    fn cast_is_capped_at_ten_preserving_order() {
        let detail = normalize_movie(movie_with_credits(15, &[]));

        assert_eq!(detail.cast.len(), 10);
        let orders: Vec<i32> = detail.cast.iter().map(|c| c.order).collect();
        assert_eq!(orders, (0..10).collect::<Vec<_>>());
        assert_eq!(detail.cast[0].name, "Actor 0");
        assert_eq!(detail.cast[9].name, "Actor 9");
    }

    #[test]
    fn short_cast_is_kept_whole() {
        let detail = normalize_movie(movie_with_credits(4, &[]));
        assert_eq!(detail.cast.len(), 4);
    }

    #[test]
    fn crew_is_whitelisted_to_director_and_writer() {
        let detail = normalize_movie(movie_with_credits(
            0,
            &["Director", "Producer", "Writer", "Editor", "Director"],
        ));

        assert_eq!(detail.crew.len(), 3);
        assert!(
            detail
                .crew
                .iter()
                .all(|member| member.job == "Director" || member.job == "Writer")
        );
    }

    #[test]
    fn movie_normalization_templates_image_urls() {
        let detail = normalize_movie(movie_with_credits(1, &[]));

        assert_eq!(
            detail.poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w370_and_h556_bestv2/matrix.jpg")
        );
        assert_eq!(
            detail.banner.as_deref(),
            Some("https://image.tmdb.org/t/p/original/matrix-backdrop.jpg")
        );
        assert_eq!(detail.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(detail.videos.len(), 1);
        assert_eq!(detail.videos[0].site, "YouTube");
    }

    #[test]
    fn missing_image_paths_are_omitted() {
        let raw: MovieDetails = serde_json::from_value(json!({
            "id": 1,
            "title": "No Art",
            "poster_path": null,
        }))
        .unwrap();
        let detail = normalize_movie(raw);
        assert!(detail.poster.is_none());
        assert!(detail.banner.is_none());
    }

    #[test]
    fn overlay_applies_parseable_rating() {
        let mut detail = normalize_movie(movie_with_credits(0, &[]));
        let record = OmdbRecord {
            director: "Lana Wachowski".to_string(),
            awards: "Won 4 Oscars.".to_string(),
            imdb_rating: "8.7".to_string(),
            ..Default::default()
        };

        overlay_ratings(&mut detail, &record);
        assert_eq!(detail.rating, Some(8.7));
        assert_eq!(detail.director.as_deref(), Some("Lana Wachowski"));
        assert_eq!(detail.awards.as_deref(), Some("Won 4 Oscars."));
    }

    #[test]
    fn unparseable_rating_is_dropped_not_zeroed() {
        let mut detail = normalize_movie(movie_with_credits(0, &[]));
        let record = OmdbRecord {
            imdb_rating: "N/A".to_string(),
            ..Default::default()
        };

        overlay_ratings(&mut detail, &record);
        assert_eq!(detail.rating, None);
        // Primary fields stay intact.
        assert_eq!(detail.title, "The Matrix");
    }

    #[test]
    fn rating_parsing_rejects_non_finite_values() {
        assert_eq!(parse_rating("8.7"), Some(8.7));
        assert_eq!(parse_rating(" 7.1 "), Some(7.1));
        assert_eq!(parse_rating("N/A"), None);
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("NaN"), None);
        assert_eq!(parse_rating("inf"), None);
    }

    #[test]
    fn tv_overlays_are_commutative_and_optional() {
        let raw: TvDetails = serde_json::from_value(json!({
            "id": 1399,
            "name": "Game of Thrones",
            "number_of_episodes": 73,
            "number_of_seasons": 8,
            "episode_run_time": [60, 50],
            "seasons": [
                {"air_date": "2011-04-17", "episode_count": 10, "name": "Season 1", "season_number": 1}
            ],
        }))
        .unwrap();

        let credits: Credits = serde_json::from_value(json!({
            "cast": [{"id": 1, "name": "Emilia Clarke"}, {"id": 2, "name": "Kit Harington"}]
        }))
        .unwrap();

        let with_credits = normalize_tv(raw.clone(), Some(credits), None);
        assert_eq!(with_credits.cast, vec!["Emilia Clarke", "Kit Harington"]);
        assert!(with_credits.videos.is_empty());
        assert_eq!(with_credits.episode_run_time, Some(60));
        assert_eq!(with_credits.seasons.len(), 1);

        // Both auxiliary fetches failing still yields a valid record.
        let bare = normalize_tv(raw, None, None);
        assert!(bare.cast.is_empty());
        assert!(bare.videos.is_empty());
        assert_eq!(bare.name, "Game of Thrones");
    }

    #[test]
    fn episode_normalization_is_rename_only() {
        let raw: EpisodeDetails = serde_json::from_value(json!({
            "air_date": "2011-04-17",
            "episode_number": 1,
            "season_number": 1,
            "name": "Winter Is Coming",
            "still_path": "/still.jpg",
        }))
        .unwrap();

        let episode = normalize_episode(raw);
        assert_eq!(episode.episode_number, 1);
        assert_eq!(
            episode.still.as_deref(),
            Some("https://image.tmdb.org/t/p/original/still.jpg")
        );
    }
}
