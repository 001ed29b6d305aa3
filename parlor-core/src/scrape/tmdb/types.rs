//! Intermediate records decoded from TMDB responses.
//!
//! Every container is tolerant: missing fields take their default, unknown
//! fields are ignored. Providers add and drop fields without notice, and a
//! detail lookup must not fail because an optional list went missing.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    pub id: u64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    pub runtime: Option<u32>,
    pub homepage: String,
    pub original_language: String,
    pub genres: Vec<GenreEntry>,
    pub production_companies: Vec<CompanyEntry>,
    pub production_countries: Vec<CountryEntry>,
    pub spoken_languages: Vec<LanguageEntry>,
    pub credits: Credits,
    pub videos: VideoList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenreEntry {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyEntry {
    pub id: u64,
    pub logo_path: Option<String>,
    pub name: String,
    pub origin_country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryEntry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub iso_639_1: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub cast: Vec<CastEntry>,
    pub crew: Vec<CrewEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CastEntry {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub order: i32,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrewEntry {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub department: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoList {
    pub results: Vec<VideoEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoEntry {
    pub key: String,
    pub name: String,
    pub site: String,
    pub size: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub first_air_date: String,
    pub number_of_episodes: i32,
    pub number_of_seasons: i32,
    pub episode_run_time: Vec<u32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub origin_country: Vec<String>,
    pub genres: Vec<GenreEntry>,
    pub networks: Vec<NetworkEntry>,
    pub created_by: Vec<CreatorEntry>,
    pub production_companies: Vec<CompanyEntry>,
    pub seasons: Vec<SeasonSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkEntry {
    pub id: u64,
    pub name: String,
    pub origin_country: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatorEntry {
    pub id: u64,
    pub name: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonSummary {
    pub air_date: String,
    pub episode_count: i32,
    pub name: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub season_number: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonDetails {
    pub air_date: String,
    pub name: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub season_number: i32,
    pub episodes: Vec<EpisodeDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeDetails {
    pub air_date: String,
    pub episode_number: i32,
    pub season_number: i32,
    pub name: String,
    pub overview: String,
    pub still_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub page: u32,
    pub results: Vec<SearchEntry>,
    pub total_results: i64,
}

/// One row of a search page. Movies carry `title`/`release_date`, series
/// carry `name`/`first_air_date`; both decode into the same entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchEntry {
    pub id: u64,
    pub title: String,
    pub name: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    pub first_air_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImagesResponse {
    pub id: u64,
    pub backdrops: Vec<ImageEntry>,
    pub posters: Vec<ImageEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageEntry {
    pub file_path: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_details_tolerates_missing_and_extra_fields() {
        let raw = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A computer hacker...",
            "runtime": 136,
            "unknown_future_field": {"nested": true}
        }"#;

        let details: MovieDetails = serde_json::from_str(raw).unwrap();
        assert_eq!(details.id, 603);
        assert_eq!(details.runtime, Some(136));
        assert!(details.genres.is_empty());
        assert!(details.credits.cast.is_empty());
        assert!(details.imdb_id.is_none());
    }

    #[test]
    fn search_entry_decodes_movie_and_tv_rows() {
        let movie: SearchEntry =
            serde_json::from_str(r#"{"id": 1, "title": "Heat", "release_date": "1995-12-15"}"#)
                .unwrap();
        assert_eq!(movie.title, "Heat");
        assert!(movie.name.is_empty());

        let tv: SearchEntry =
            serde_json::from_str(r#"{"id": 2, "name": "Dark", "first_air_date": "2017-12-01"}"#)
                .unwrap();
        assert_eq!(tv.name, "Dark");
        assert!(tv.title.is_empty());
    }

    #[test]
    fn null_paths_decode_as_none() {
        let entry: MovieDetails =
            serde_json::from_str(r#"{"id": 3, "poster_path": null, "backdrop_path": null}"#)
                .unwrap();
        assert!(entry.poster_path.is_none());
        assert!(entry.backdrop_path.is_none());
    }
}
