//! Absolute image URLs from provider-relative paths.

pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Poster size used on detail records.
pub const POSTER_DETAIL: &str = "w370_and_h556_bestv2";
/// Full-size rendition for banners and image-search results.
pub const ORIGINAL: &str = "original";
/// Thumbnail sizes for the structured image-search adapter.
pub const BANNER_THUMB: &str = "w500_and_h282_face";
pub const POSTER_THUMB: &str = "w220_and_h330_face";

/// Build an absolute image URL from a size template and a provider-relative
/// path. An empty path yields `None`: a templated URL with an empty suffix
/// would be technically valid but never resolve, so it is omitted outright.
pub fn image_url(size: &str, path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    Some(format!("{TMDB_IMAGE_BASE}/{size}{path}"))
}

/// Same as [`image_url`] for optional paths.
pub fn image_url_opt(size: &str, path: Option<&str>) -> Option<String> {
    path.and_then(|p| image_url(size, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_absolute_url_from_relative_path() {
        assert_eq!(
            image_url(POSTER_DETAIL, "/abc.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/w370_and_h556_bestv2/abc.jpg")
        );
    }

    #[test]
    fn empty_path_is_omitted_not_templated() {
        assert_eq!(image_url(ORIGINAL, ""), None);
        assert_eq!(image_url_opt(ORIGINAL, None), None);
        assert_eq!(image_url_opt(ORIGINAL, Some("")), None);
    }
}
