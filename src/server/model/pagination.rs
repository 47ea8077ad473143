//! Page selection shared by every paginated listing.

use crate::{model::api::PaginationParams, server::error::AppError};

/// Largest page a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Validated, zero-indexed page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub per_page: u64,
}

impl PageParams {
    /// Validates raw query parameters.
    ///
    /// # Returns
    /// - `Ok(PageParams)` - `per_page` lies within `1..=100` and the page offset fits a SQL offset
    /// - `Err(AppError::Validation)` - `per_page` is out of range, or `page` is too large
    pub fn from_dto(dto: PaginationParams) -> Result<Self, AppError> {
        if dto.per_page == 0 || dto.per_page > MAX_PER_PAGE {
            return Err(AppError::validation(
                "per_page",
                format!("per_page must be between 1 and {}", MAX_PER_PAGE),
            ));
        }

        // The paginator computes `per_page * page` as the row offset.
        let offset_fits = dto
            .page
            .checked_mul(dto.per_page)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !offset_fits {
            return Err(AppError::validation("page", "page is out of range"));
        }

        Ok(Self {
            page: dto.page,
            per_page: dto.per_page,
        })
    }
}

/// One page of items plus the metadata needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1))
    }
}
