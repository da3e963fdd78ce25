//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// A page request, generic over the sort column whitelist of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<S> {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub limit: u32,

    pub sort_by: S,
    pub sort_order: SortOrder,
}

impl<S: Default> Default for PageRequest<S> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: S::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl<S> PageRequest<S> {
    /// Create a page request exactly as given
    pub fn new(page: u32, limit: u32, sort_by: S, sort_order: SortOrder) -> Self {
        Self {
            page,
            limit,
            sort_by,
            sort_order,
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Clamp page to at least 1 and limit into the allowed range
    pub fn validate(mut self) -> Self {
        self.page = self.page.max(DEFAULT_PAGE);
        self.limit = self.limit.clamp(MIN_LIMIT, MAX_LIMIT);
        self
    }
}

/// Page metadata returned alongside the items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total_items: u64,

    /// Number of items in this page
    pub item_count: u64,

    pub items_per_page: u32,
    pub total_pages: u64,
    pub current_page: u32,
}

impl PaginationMeta {
    pub fn new(total_items: u64, item_count: u64, limit: u32, page: u32) -> Self {
        Self {
            total_items,
            item_count,
            items_per_page: limit,
            total_pages: Self::calculate_total_pages(total_items, limit),
            current_page: page,
        }
    }

    /// `ceil(total / limit)`, zero for a zero limit
    pub fn calculate_total_pages(total_items: u64, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        total_items.div_ceil(u64::from(limit))
    }
}

/// A page of items plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> PaginatedResult<T> {
    /// Build a page for `request` out of the slice `data` and the full count
    pub fn new<S>(data: Vec<T>, total_items: u64, request: &PageRequest<S>) -> Self {
        let meta = PaginationMeta::new(total_items, data.len() as u64, request.limit, request.page);
        Self { data, meta }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResult {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(PaginationMeta::calculate_total_pages(0, 10), 0);
        assert_eq!(PaginationMeta::calculate_total_pages(10, 10), 1);
        assert_eq!(PaginationMeta::calculate_total_pages(11, 10), 2);
        assert_eq!(PaginationMeta::calculate_total_pages(25, 0), 0);
    }

    #[test]
    fn test_offset() {
        let request = PageRequest::new(3, 20, (), SortOrder::Asc);
        assert_eq!(request.offset(), 40);

        let first = PageRequest::new(0, 20, (), SortOrder::Asc);
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_validate_clamps() {
        let request = PageRequest::new(0, 500, (), SortOrder::Desc).validate();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, MAX_LIMIT);

        let request = PageRequest::new(2, 0, (), SortOrder::Desc).validate();
        assert_eq!(request.limit, MIN_LIMIT);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"DESC\"");
    }

    #[test]
    fn test_map_keeps_meta() {
        let request = PageRequest::new(2, 2, (), SortOrder::Asc);
        let page = PaginatedResult::new(vec![1, 2], 5, &request).map(|n| n * 10);

        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.current_page, 2);
        assert_eq!(page.meta.item_count, 2);
    }
}
