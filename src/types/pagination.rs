//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Pagination query parameters (reusable across list endpoints)
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Clamp out-of-range values: page below 1 becomes 1, per_page below 1
    /// falls back to the default size. There is deliberately no upper cap
    /// on per_page.
    pub fn normalized(&self) -> Self {
        Self {
            page: self.page.max(DEFAULT_PAGE_NUMBER),
            per_page: if self.per_page < 1 {
                DEFAULT_PAGE_SIZE
            } else {
                self.per_page
            },
        }
    }

    /// Calculate offset for database query. Saturates: a window that
    /// starts past `u64::MAX` rows is empty either way.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Number of items per page
    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper (reusable for all list responses)
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            meta: PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }

    /// Map the items into another representation, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_zero_page_and_size() {
        let params = PaginationParams::new(0, 0).normalized();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn normalized_keeps_large_page_sizes() {
        let params = PaginationParams::new(2, 5000).normalized();
        assert_eq!(params.per_page, 5000);
    }

    #[test]
    fn offset_is_zero_based_window_start() {
        assert_eq!(PaginationParams::new(1, 10).offset(), 0);
        assert_eq!(PaginationParams::new(3, 2).offset(), 4);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let params = PaginationParams::new(u64::MAX, 2).normalized();
        assert_eq!(params.offset(), u64::MAX);
        assert_eq!(PaginationParams::new(2, u64::MAX).offset(), u64::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: Paginated<i32> = Paginated::new(vec![], 1, 2, 5);
        assert_eq!(page.meta.total_pages, 3);
    }
}
