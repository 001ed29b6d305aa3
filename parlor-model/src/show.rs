use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A flat, externally sourced catalog record. Shows are fed by the metadata
/// aggregator and keep their provider fields as plain strings, including the
/// secondary-source rating/awards block.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub rated: String,
    pub poster: String,
    pub banner: String,
    pub imdb_id: String,
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub website: String,
    pub trailer: String,
    pub player_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a [`Show`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowDraft {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub rated: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub imdb_id: String,
    #[serde(default)]
    pub imdb_rating: String,
    #[serde(default)]
    pub imdb_votes: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub trailer: String,
    #[serde(default)]
    pub player_url: String,
}
