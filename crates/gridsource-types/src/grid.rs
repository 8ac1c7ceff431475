use serde::{Deserialize, Serialize};

/// Metadata describing one displayable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub display_name: String,
    pub field_key: String,
    pub order: i32,
    pub is_primary_key: bool,
    pub is_image_path: bool,
}

/// One materialized record: primary key, optional image path, text cells.
///
/// `cells` is parallel to the plain (non-primary-key, non-image) columns
/// in declared order; an extraction fault substitutes an empty string,
/// never a missing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub primary_key: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub cells: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RowAction>,
}

/// Row-scoped action descriptor attached by the edit-action hook.
///
/// The core only carries these; their content and rendering belong to the
/// concrete grid and its renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    pub label: String,
    pub route: String,
    pub primary_key: i64,
}

impl RowAction {
    pub fn new(label: impl Into<String>, route: impl Into<String>, primary_key: i64) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
            primary_key,
        }
    }
}

/// Permitted page lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    Unset,
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    /// `Unset` normalizes to the default of ten before use.
    pub fn normalize(self) -> Self {
        match self {
            PageSize::Unset => PageSize::Ten,
            other => other,
        }
    }

    pub fn limit(self) -> usize {
        match self {
            PageSize::Unset | PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Unset
    }
}

/// Three-state sort toggle; cyclic, never skips a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Unset,
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Unset
    }
}

/// Paging and sorting parameters carried from the request.
///
/// `sort_direction` and `last_sort_field` are threaded from the previous
/// render (request state); the view echoes the resolved values back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridRequest {
    /// Requested 1-based page; 0 means unset and normalizes to 1.
    pub page_index: usize,
    pub page_size: PageSize,
    /// Requested sort field; empty means no sort request.
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub last_sort_field: String,
}

/// Output aggregate handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridView {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<GridRow>,
    /// Filtered candidate count, captured before paging.
    pub total_rows: usize,
    pub pager_summary: String,
    pub page_index: usize,
    pub page_size: PageSize,
    pub sort_field: String,
    pub sort_direction: SortDirection,
}
