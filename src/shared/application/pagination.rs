/// Pagination support for queries
///
/// Standard pagination model used by every listing operation
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries (1-based pages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Row offset of the window, `None` when it does not fit a PostgreSQL `BIGINT`
    pub fn checked_offset(&self) -> Option<i64> {
        (i64::from(self.page) - 1)
            .max(0)
            .checked_mul(i64::from(self.page_size))
    }

    /// Offset for database queries. Saturates; an unreachable window is simply empty.
    pub fn offset(&self) -> i64 {
        self.checked_offset().unwrap_or(i64::MAX)
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(params.page_size)) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
