use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::refs::{ImageRef, PersonRef, PlayerRef, VideoRef};

/// A recorded concert catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Concert {
    pub id: Uuid,
    pub title: String,
    pub concert_date: String,
    pub release_date: String,
    pub place: String,
    pub overview: String,
    pub setlist: String,
    pub artist: Json<PersonRef>,
    pub banners: Json<Vec<ImageRef>>,
    pub videos: Json<Vec<VideoRef>>,
    pub player: Option<Json<PlayerRef>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConcertDraft {
    pub title: String,
    #[serde(default)]
    pub concert_date: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub setlist: String,
    #[serde(default)]
    pub artist: PersonRef,
    #[serde(default)]
    pub banners: Vec<ImageRef>,
    #[serde(default)]
    pub videos: Vec<VideoRef>,
    #[serde(default)]
    pub player: Option<PlayerRef>,
}
