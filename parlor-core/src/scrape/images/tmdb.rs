//! Structured image search against the metadata provider's image listing.

use super::{ImageHit, ImageKind};
use crate::scrape::error::ProviderError;
use crate::scrape::tmdb::TmdbClient;
use crate::scrape::tmdb::types::ImagesResponse;
use crate::scrape::urls::{BANNER_THUMB, ORIGINAL, POSTER_THUMB, image_url};

#[derive(Debug, Clone)]
pub struct TmdbImageSearch {
    client: TmdbClient,
}

impl TmdbImageSearch {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// Artwork for a movie. An unknown kind yields an empty list.
    pub async fn movie_images(
        &self,
        tmdb_id: u64,
        kind: &str,
    ) -> Result<Vec<ImageHit>, ProviderError> {
        let Some(kind) = ImageKind::from_query(kind) else {
            return Ok(Vec::new());
        };
        let response = self.client.movie_images(tmdb_id).await?;
        Ok(normalize(response, kind))
    }

    /// Artwork for a series, same contract as [`Self::movie_images`].
    pub async fn tv_images(
        &self,
        tmdb_id: u64,
        kind: &str,
    ) -> Result<Vec<ImageHit>, ProviderError> {
        let Some(kind) = ImageKind::from_query(kind) else {
            return Ok(Vec::new());
        };
        let response = self.client.tv_images(tmdb_id).await?;
        Ok(normalize(response, kind))
    }
}

/// Map each relative path through the kind-specific templates: a sized
/// thumbnail and the original rendition share the same path.
fn normalize(response: ImagesResponse, kind: ImageKind) -> Vec<ImageHit> {
    let (paths, thumb_size) = match kind {
        ImageKind::Banners => (response.backdrops, BANNER_THUMB),
        ImageKind::Posters => (response.posters, POSTER_THUMB),
    };

    paths
        .into_iter()
        .filter_map(|entry| {
            let thumbnail = image_url(thumb_size, &entry.file_path)?;
            let image = image_url(ORIGINAL, &entry.file_path)?;
            Some(ImageHit { thumbnail, image })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn images_fixture() -> ImagesResponse {
        serde_json::from_value(json!({
            "id": 603,
            "backdrops": [
                {"file_path": "/b1.jpg", "width": 1920, "height": 1080},
                {"file_path": "/b2.jpg", "width": 1920, "height": 1080},
                {"file_path": "/b3.jpg", "width": 1280, "height": 720}
            ],
            "posters": [
                {"file_path": "/p1.jpg", "width": 500, "height": 750}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn banners_map_every_backdrop_through_both_templates() {
        let hits = normalize(images_fixture(), ImageKind::Banners);

        assert_eq!(hits.len(), 3);
        assert_eq!(
            hits[0],
            ImageHit {
                thumbnail: "https://image.tmdb.org/t/p/w500_and_h282_face/b1.jpg".to_string(),
                image: "https://image.tmdb.org/t/p/original/b1.jpg".to_string(),
            }
        );
    }

    #[test]
    fn posters_use_the_poster_thumbnail_template() {
        let hits = normalize(images_fixture(), ImageKind::Posters);

        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].thumbnail,
            "https://image.tmdb.org/t/p/w220_and_h330_face/p1.jpg"
        );
        assert_eq!(hits[0].image, "https://image.tmdb.org/t/p/original/p1.jpg");
    }

    #[test]
    fn empty_file_paths_are_skipped() {
        let response: ImagesResponse = serde_json::from_value(json!({
            "id": 1,
            "backdrops": [{"file_path": ""}, {"file_path": "/ok.jpg"}]
        }))
        .unwrap();

        let hits = normalize(response, ImageKind::Banners);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].image.ends_with("/ok.jpg"));
    }

    #[test]
    fn empty_listing_yields_empty_result() {
        let response = ImagesResponse::default();
        assert!(normalize(response, ImageKind::Banners).is_empty());
        assert!(normalize(ImagesResponse::default(), ImageKind::Posters).is_empty());
    }
}
