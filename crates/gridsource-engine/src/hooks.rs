//! Customization seams supplied by concrete grids.

use gridsource_types::GridRow;

/// Strategy hooks around the core pass.
///
/// `narrow` runs first, before headers, paging, and sorting, and may drop
/// or reshape candidate records. `attach_actions` runs last, once rows are
/// fully materialized, and may decorate them with row-scoped action
/// descriptors keyed by primary key.
pub trait GridHooks<R> {
    fn narrow(&self, candidates: Vec<R>) -> Vec<R>;

    fn attach_actions(&self, rows: Vec<GridRow>) -> Vec<GridRow>;
}

/// Hooks for plain grids with no filtering and no row actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<R> GridHooks<R> for PassThrough {
    fn narrow(&self, candidates: Vec<R>) -> Vec<R> {
        candidates
    }

    fn attach_actions(&self, rows: Vec<GridRow>) -> Vec<GridRow> {
        rows
    }
}
