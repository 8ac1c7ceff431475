//! One-pass grid initialization: filter, headers, paging, sorting, rows,
//! actions.

use crate::headers::build_columns;
use crate::hooks::GridHooks;
use crate::materialize::build_rows;
use crate::pager::PageBounds;
use crate::sorter::{self, SortState};
use gridsource_types::{GridRequest, GridView, RecordSchema, Result};

/// Grid state scoped to a single render request.
///
/// Construct it with the fetched candidate records and the request
/// parameters, run [`initialize`](Self::initialize) exactly once, hand the
/// view to the renderer, drop it. Nothing is retained across requests.
pub struct GridSource<'a, R, H> {
    schema: &'a RecordSchema<R>,
    hooks: H,
    data: Vec<R>,
    request: GridRequest,
}

impl<'a, R, H: GridHooks<R>> GridSource<'a, R, H> {
    /// A caller with no fetched data may pass `None`; it normalizes to an
    /// empty sequence.
    pub fn new(
        schema: &'a RecordSchema<R>,
        hooks: H,
        data: Option<Vec<R>>,
        request: GridRequest,
    ) -> Self {
        Self {
            schema,
            hooks,
            data: data.unwrap_or_default(),
            request,
        }
    }

    /// Run the pass.
    ///
    /// Order matters and is load-bearing: the total-row count is captured
    /// on the filtered sequence before paging, and sorting runs after
    /// paging, so a sort request reorders only the visible page.
    pub fn initialize(self) -> Result<GridView> {
        let Self {
            schema,
            hooks,
            data,
            request,
        } = self;

        let data = hooks.narrow(data);

        let total_rows = data.len();
        let columns = build_columns(schema, total_rows > 0);

        let bounds = PageBounds::resolve(request.page_index, request.page_size);
        let pager_summary = bounds.summary(total_rows);
        let mut data = bounds.slice(data);

        let mut sort = SortState {
            field: request.sort_field,
            direction: request.sort_direction,
            last_field: request.last_sort_field,
        };
        sorter::apply_sort(schema, &mut data, &mut sort)?;

        let rows = build_rows(schema, &columns, &data);
        let rows = hooks.attach_actions(rows);

        Ok(GridView {
            columns,
            rows,
            total_rows,
            pager_summary,
            page_index: bounds.page_index,
            page_size: bounds.page_size,
            sort_field: sort.field,
            sort_direction: sort.direction,
        })
    }
}
