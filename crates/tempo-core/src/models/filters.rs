//! Sorting and paging options for listing goals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest page a listing may request.
pub const MAX_PER_PAGE: u32 = 100;

/// Page size used when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Column a goal listing is ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalSort {
    #[default]
    CreatedAt,
    Title,
    Level,
}

impl FromStr for GoalSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created_at" | "created" => Ok(GoalSort::CreatedAt),
            "title" => Ok(GoalSort::Title),
            "level" => Ok(GoalSort::Level),
            _ => Err(format!("Invalid sort column: {s}")),
        }
    }
}

impl GoalSort {
    /// SQL column backing this sort key
    pub fn column(&self) -> &'static str {
        match self {
            GoalSort::CreatedAt => "created_at",
            GoalSort::Title => "title",
            GoalSort::Level => "level",
        }
    }
}

/// Direction of a goal listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Validated query options for listing goals.
#[derive(Debug, Clone)]
pub struct GoalFilter {
    /// 1-based page number
    pub page: u32,
    /// Page size, clamped to [`MAX_PER_PAGE`]
    pub per_page: u32,
    pub sort: GoalSort,
    pub order: SortOrder,
}

impl Default for GoalFilter {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            sort: GoalSort::default(),
            order: SortOrder::default(),
        }
    }
}

impl GoalFilter {
    /// Number of rows to skip for the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

impl From<&crate::params::ListGoals> for GoalFilter {
    /// Convert listing parameters into a filter, clamping the page size.
    ///
    /// ```rust
    /// use tempo_core::{models::GoalFilter, params::ListGoals};
    ///
    /// let params = ListGoals { page: Some(2), per_page: Some(500), ..Default::default() };
    /// let filter: GoalFilter = (&params).into();
    /// assert_eq!(filter.per_page, 100);
    /// assert_eq!(filter.offset(), 100);
    /// ```
    fn from(params: &crate::params::ListGoals) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            per_page: params
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
            sort: params.sort,
            order: params.order,
        }
    }
}
