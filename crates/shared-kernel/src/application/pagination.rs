// crates/shared-kernel/src/application/pagination.rs

use serde::{Deserialize, Serialize};

/// Pagination 1-based ; `size` borné pour protéger la base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "PageRequest::default_page")]
    pub page: u64,
    #[serde(default = "PageRequest::default_size")]
    pub size: u64,
}

impl PageRequest {
    pub const MAX_SIZE: u64 = 100;
    /// Au-delà, l'OFFSET Postgres n'a plus de sens (et déborderait un i64)
    pub const MAX_PAGE: u64 = 1_000_000;

    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.clamp(1, Self::MAX_PAGE),
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    fn default_page() -> u64 {
        1
    }

    fn default_size() -> u64 {
        20
    }

    /// Re-borne une requête désérialisée telle quelle depuis une query string
    pub fn normalized(self) -> Self {
        Self::new(self.page, self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }

    /// Saturant : une requête construite sans `new` ne peut pas faire paniquer le calcul
    pub fn offset(&self) -> i64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.size);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::default_page(), Self::default_size())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
