use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Raw query-string inputs for the list endpoint. Values stay as strings so
/// that unparseable input falls back to the defaults instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Normalized pagination window: `page` and `page_size` are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub page_size: i64,
}

impl PageParams {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&ListQuery> for PageParams {
    fn from(query: &ListQuery) -> Self {
        Self {
            page: normalize(query.page.as_deref(), DEFAULT_PAGE),
            page_size: normalize(query.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        }
    }
}

/// Absent, unparseable and non-positive values all fall back to the default.
fn normalize(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|parsed| *parsed >= 1)
        .unwrap_or(default)
}

/// Pagination envelope returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(params: PageParams, total_items: i64, data: Vec<T>) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            total_items,
            total_pages: total_pages(total_items, params.page_size),
            data,
        }
    }
}

fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items == 0 {
        return 0;
    }
    // Division form; the additive ceiling overflows for page sizes near
    // i64::MAX, which normalize() accepts.
    total_items / page_size + i64::from(total_items % page_size != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, page_size: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(str::to_owned),
            page_size: page_size.map(str::to_owned),
        }
    }

    #[test]
    fn absent_parameters_use_defaults() {
        let params = PageParams::from(&query(None, None));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 15);
    }

    #[test]
    fn unparseable_parameters_use_defaults() {
        let params = PageParams::from(&query(Some("three"), Some("")));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 15);
    }

    #[test]
    fn non_positive_parameters_use_defaults() {
        let params = PageParams::from(&query(Some("0"), Some("-5")));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 15);
    }

    #[test]
    fn valid_parameters_are_kept() {
        let params = PageParams::from(&query(Some("3"), Some("2")));
        assert_eq!(params.page, 3);
        assert_eq!(params.page_size, 2);
        assert_eq!(params.offset(), 4);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(1, 15), 1);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(30, 15), 2);
        assert_eq!(total_pages(31, 15), 3);
    }

    #[test]
    fn total_pages_survives_extreme_page_sizes() {
        assert_eq!(total_pages(1, i64::MAX), 1);
        assert_eq!(total_pages(5, i64::MAX), 1);
        assert_eq!(total_pages(i64::MAX, 1), i64::MAX);
    }

    #[test]
    fn envelope_carries_the_window_and_totals() {
        let params = PageParams { page: 2, page_size: 2 };
        let page = Paginated::new(params, 5, vec!["a", "b"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 2);
    }
}
