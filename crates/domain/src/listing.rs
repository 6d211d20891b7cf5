use std::cmp::Ordering;
use std::str::FromStr;

use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Sort direction for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns stable query-string value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(AppError::Validation(format!(
                "unknown sort direction '{value}'"
            ))),
        }
    }
}

type TextSelector<'a, T> = Box<dyn Fn(&T) -> Option<&str> + Send + Sync + 'a>;
type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;
type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>;

/// Composable filter and sort over an in-memory collection.
///
/// A search term matches when any registered text field contains it,
/// case-insensitively. Every predicate must hold. Sorting is stable.
pub struct ListFilter<'a, T> {
    search_term: Option<String>,
    search_fields: Vec<TextSelector<'a, T>>,
    predicates: Vec<Predicate<'a, T>>,
    sort: Option<(Comparator<'a, T>, SortDirection)>,
}

impl<T> Default for ListFilter<'_, T> {
    fn default() -> Self {
        Self {
            search_term: None,
            search_fields: Vec::new(),
            predicates: Vec::new(),
            sort: None,
        }
    }
}

impl<'a, T> ListFilter<'a, T> {
    /// Creates an empty filter that keeps every item in input order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term. Blank terms disable searching.
    #[must_use]
    pub fn search(mut self, term: Option<&str>) -> Self {
        self.search_term = term
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty());
        self
    }

    /// Registers a text field considered by the search term.
    #[must_use]
    pub fn search_in<F>(mut self, field: F) -> Self
    where
        F: Fn(&T) -> Option<&str> + Send + Sync + 'a,
    {
        self.search_fields.push(Box::new(field));
        self
    }

    /// Adds a predicate that every kept item must satisfy.
    #[must_use]
    pub fn matching<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Adds a predicate only when `value` is present.
    #[must_use]
    pub fn matching_if<V, F>(self, value: Option<V>, predicate: F) -> Self
    where
        V: Send + Sync + 'a,
        F: Fn(&T, &V) -> bool + Send + Sync + 'a,
    {
        match value {
            Some(value) => self.matching(move |item| predicate(item, &value)),
            None => self,
        }
    }

    /// Sorts kept items with a comparator in the given direction.
    #[must_use]
    pub fn sort_with<F>(mut self, comparator: F, direction: SortDirection) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        self.sort = Some((Box::new(comparator), direction));
        self
    }

    /// Sorts kept items by an ordered key in the given direction.
    #[must_use]
    pub fn sort_by_key<K, F>(self, key: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.sort_with(move |left, right| key(left).cmp(&key(right)), direction)
    }

    /// Returns whether one item passes the search term and predicates.
    #[must_use]
    pub fn accepts(&self, item: &T) -> bool {
        let matches_search = match &self.search_term {
            None => true,
            Some(term) => self.search_fields.iter().any(|field| {
                field(item).is_some_and(|value| value.to_lowercase().contains(term.as_str()))
            }),
        };

        matches_search && self.predicates.iter().all(|predicate| predicate(item))
    }

    /// Filters and sorts a collection.
    #[must_use]
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        let mut kept: Vec<T> = items.into_iter().filter(|item| self.accepts(item)).collect();

        if let Some((comparator, direction)) = &self.sort {
            kept.sort_by(|left, right| match direction {
                SortDirection::Asc => comparator(left, right),
                SortDirection::Desc => comparator(right, left),
            });
        }

        kept
    }
}

/// Page metadata returned alongside page items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current 1-based page.
    pub current: usize,
    /// Total page count.
    pub pages: usize,
    /// Total item count across all pages.
    pub total: usize,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
}

/// One page of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Page metadata.
    pub pagination: Pagination,
}

/// Slices `items` into the requested 1-based page.
///
/// Page `0` is treated as page `1`. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> AppResult<Page<T>> {
    if limit == 0 {
        return Err(AppError::Validation(
            "page limit must be greater than zero".to_owned(),
        ));
    }

    let current = page.max(1);
    let total = items.len();
    let pages = total.div_ceil(limit);
    let start = (current - 1).saturating_mul(limit);

    let items = items.into_iter().skip(start).take(limit).collect();

    Ok(Page {
        items,
        pagination: Pagination {
            current,
            pages,
            total,
            has_next: current < pages,
            has_prev: current > 1,
        },
    })
}
