use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::refs::{
    CountryRef, GenreRef, ImageRef, PersonRef, PlayerRef, ProductionRef,
    VideoRef,
};

/// A movie catalog entry. Associated lists live inline as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub tmdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub runtime: i32,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub genres: Json<Vec<GenreRef>>,
    pub actors: Json<Vec<PersonRef>>,
    pub productions: Json<Vec<ProductionRef>>,
    pub countries: Json<Vec<CountryRef>>,
    pub languages: Json<Vec<CountryRef>>,
    pub banners: Json<Vec<ImageRef>>,
    pub posters: Json<Vec<ImageRef>>,
    pub videos: Json<Vec<VideoRef>>,
    pub player: Option<Json<PlayerRef>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a [`Movie`]; request body for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDraft {
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub runtime: i32,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub writer: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreRef>,
    #[serde(default)]
    pub actors: Vec<PersonRef>,
    #[serde(default)]
    pub productions: Vec<ProductionRef>,
    #[serde(default)]
    pub countries: Vec<CountryRef>,
    #[serde(default)]
    pub languages: Vec<CountryRef>,
    #[serde(default)]
    pub banners: Vec<ImageRef>,
    #[serde(default)]
    pub posters: Vec<ImageRef>,
    #[serde(default)]
    pub videos: Vec<VideoRef>,
    #[serde(default)]
    pub player: Option<PlayerRef>,
}
