//! Three-state sort toggle and reordering by extracted field value.
//!
//! Repeated requests on the same field cycle ascending and descending;
//! switching fields while ascending keeps ascending. Ordering executes on
//! whatever candidate sequence is current at invocation time.

use std::cmp::Ordering;

use gridsource_types::{Error, Extracted, RecordSchema, Result, SortDirection};

/// Sort request state threaded across renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    /// Requested field; empty means no sort request.
    pub field: String,
    pub direction: SortDirection,
    /// Field sorted on in the previous render.
    pub last_field: String,
}

/// Resolve the toggle and reorder the records in place.
///
/// An empty request leaves the order and direction untouched but still
/// records the (empty) request as `last_field`. An unregistered field
/// fails fast rather than silently not sorting.
pub fn apply_sort<R>(
    schema: &RecordSchema<R>,
    records: &mut Vec<R>,
    state: &mut SortState,
) -> Result<()> {
    if !state.field.is_empty() {
        state.direction = next_direction(state.direction, &state.field, &state.last_field);

        let accessor = schema
            .accessor(&state.field)
            .ok_or_else(|| Error::UnknownSortField {
                record: schema.record(),
                field: state.field.clone(),
            })?;

        // Decorate-sort-undecorate: one extraction per record.
        let mut keyed: Vec<(Extracted, R)> =
            records.drain(..).map(|r| (accessor(&r), r)).collect();

        match state.direction {
            SortDirection::Descending => keyed.sort_by(key_compare_desc),
            _ => keyed.sort_by(key_compare_asc),
        }

        records.extend(keyed.into_iter().map(|(_, r)| r));
    }

    state.last_field = state.field.clone();
    Ok(())
}

fn next_direction(current: SortDirection, field: &str, last_field: &str) -> SortDirection {
    match current {
        SortDirection::Unset => SortDirection::Ascending,
        SortDirection::Ascending if field == last_field => SortDirection::Descending,
        SortDirection::Descending => SortDirection::Ascending,
        // Switching fields while ascending stays ascending.
        SortDirection::Ascending => SortDirection::Ascending,
    }
}

fn key_compare_asc<R>(a: &(Extracted, R), b: &(Extracted, R)) -> Ordering {
    a.0.compare(&b.0)
}

// Reversed comparator rather than sort-then-reverse: ties keep their
// original relative order either way.
fn key_compare_desc<R>(a: &(Extracted, R), b: &(Extracted, R)) -> Ordering {
    b.0.compare(&a.0)
}
