use serde::{Deserialize, Serialize};

/// Pagination bounds for list endpoints. Page numbering starts at 1.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 25;

    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(Self::DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.filter(|l| *l > 0).unwrap_or(Self::DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> u32 {
        (self.page() - 1) * self.limit()
    }
}

/// Envelope metadata echoed back on every paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub limit: u32,
    pub offset: u32,
    pub page: u32,
    pub total: i64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            limit: request.limit(),
            offset: request.offset(),
            page: request.page(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_missing_or_zero() {
        let request = PageRequest {
            page: None,
            limit: Some(0),
        };
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 25);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let request = PageRequest {
            page: Some(3),
            limit: Some(10),
        };
        let meta = PageMeta::new(request, 57);
        assert_eq!(meta.offset, 20);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.total, 57);
    }
}
