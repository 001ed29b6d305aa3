use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored image asset: banner, poster, profile picture, general artwork.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ImageAsset {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub keyword: String,
    pub source: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageAssetDraft {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub source: String,
    pub path: String,
}
