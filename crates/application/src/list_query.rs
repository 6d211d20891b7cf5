use coachdesk_core::AppError;
use coachdesk_domain::SortDirection;

use crate::gateway_ports::RemoteFilter;

/// Page size used when a list request does not name one.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Search, filter, sort and page parameters shared by every list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text search term.
    pub search: Option<String>,
    /// Status filter; meaning depends on the feature.
    pub status: Option<String>,
    /// Sort key; `None` keeps platform order.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: SortDirection,
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            sort: None,
            direction: SortDirection::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ListQuery {
    /// Returns the non-blank search term.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }

    /// Returns the non-blank status filter.
    #[must_use]
    pub fn status_filter(&self) -> Option<String> {
        non_blank(self.status.as_deref()).map(str::to_owned)
    }

    /// Returns the parameters forwarded to the platform.
    #[must_use]
    pub fn remote_filter(&self) -> RemoteFilter {
        RemoteFilter {
            search: self.search_term().map(str::to_owned),
            status: self.status_filter(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn unknown_sort_key(key: &str, allowed: &[&str]) -> AppError {
    AppError::Validation(format!(
        "unknown sort key '{key}', expected one of: {}",
        allowed.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::ListQuery;

    #[test]
    fn blank_parameters_are_not_forwarded() {
        let query = ListQuery {
            search: Some("  ".to_owned()),
            status: Some(" published ".to_owned()),
            ..ListQuery::default()
        };

        let filter = query.remote_filter();
        assert_eq!(filter.search, None);
        assert_eq!(filter.status.as_deref(), Some("published"));
        assert_eq!(filter.query_pairs(), vec![("status", "published")]);
    }
}
