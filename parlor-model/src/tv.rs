use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::refs::{
    CountryRef, GenreRef, ImageRef, NetworkRef, PersonRef, PlayerRef,
    ProductionRef,
};

/// One episode inside a stored season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRef {
    pub air_date: String,
    pub episode_number: i32,
    pub season_number: i32,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub still_path: Option<String>,
    #[serde(default)]
    pub player: Option<PlayerRef>,
}

/// One season of a stored series, with its episode list inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRef {
    pub air_date: String,
    pub episode_count: i32,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub season_number: i32,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub episodes: Vec<EpisodeRef>,
}

/// A TV series catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TvShow {
    pub id: Uuid,
    pub tmdb_id: Option<i64>,
    pub name: String,
    pub overview: String,
    pub first_air_date: String,
    pub episode_count: i32,
    pub season_count: i32,
    pub seasons: Json<Vec<SeasonRef>>,
    pub genres: Json<Vec<GenreRef>>,
    pub actors: Json<Vec<PersonRef>>,
    pub creators: Json<Vec<PersonRef>>,
    pub networks: Json<Vec<NetworkRef>>,
    pub productions: Json<Vec<ProductionRef>>,
    pub countries: Json<Vec<CountryRef>>,
    pub banners: Json<Vec<ImageRef>>,
    pub posters: Json<Vec<ImageRef>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a [`TvShow`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TvShowDraft {
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub first_air_date: String,
    #[serde(default)]
    pub episode_count: i32,
    #[serde(default)]
    pub season_count: i32,
    #[serde(default)]
    pub seasons: Vec<SeasonRef>,
    #[serde(default)]
    pub genres: Vec<GenreRef>,
    #[serde(default)]
    pub actors: Vec<PersonRef>,
    #[serde(default)]
    pub creators: Vec<PersonRef>,
    #[serde(default)]
    pub networks: Vec<NetworkRef>,
    #[serde(default)]
    pub productions: Vec<ProductionRef>,
    #[serde(default)]
    pub countries: Vec<CountryRef>,
    #[serde(default)]
    pub banners: Vec<ImageRef>,
    #[serde(default)]
    pub posters: Vec<ImageRef>,
}
