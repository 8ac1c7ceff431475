//! gridsource: a generic grid data-source engine for admin backends.
//!
//! # Overview
//!
//! `gridsource` turns any in-memory record collection into
//! presentation-ready grid data: ordered column descriptors, paged and
//! sorted rows of text cells, and a visible-range summary. Callers
//! register a [`types::RecordSchema`] once per record type (field
//! descriptors, typed accessors, enum description tables), then run one
//! pass per render request. Fetching records and rendering markup stay
//! with the caller.
//!
//! # Quickstart
//!
//! ```
//! use gridsource::types::{Extracted, FieldSpec, GridRequest, RecordSchema};
//! use gridsource::{PassThrough, render_grid};
//!
//! struct Task {
//!     id: i64,
//!     title: String,
//! }
//!
//! let schema = RecordSchema::builder("Task")
//!     .field(FieldSpec::new("Id"), |t: &Task| Extracted::of(t.id))
//!     .field(FieldSpec::new("Title").grid(1), |t: &Task| {
//!         Extracted::of(t.title.clone())
//!     })
//!     .build();
//!
//! let tasks = vec![
//!     Task { id: 1, title: "Ship the release".to_string() },
//!     Task { id: 2, title: "Write docs".to_string() },
//! ];
//!
//! let view = render_grid(&schema, PassThrough, tasks, GridRequest::default())?;
//! assert_eq!(view.total_rows, 2);
//! assert_eq!(view.pager_summary, "Results: 1-2 of 2");
//! # Ok::<(), gridsource::Error>(())
//! ```
//!
//! # Architecture
//!
//! This crate is a facade over:
//! - `gridsource-types`: record schemas, field values, grid view models
//! - `gridsource-engine`: the header/pager/sorter/materializer pipeline
//!
//! Concrete grids customize the pass through [`GridHooks`]: `narrow`
//! filters candidates before anything else runs, `attach_actions`
//! decorates materialized rows with edit/delete descriptors.

pub mod error;
pub mod types;

// Public facade
pub use error::{Error, Result};
pub use gridsource_engine::{GridHooks, GridSource, PRIMARY_KEY_FIELD, PassThrough};

use crate::types::{GridRequest, GridView, RecordSchema};

/// Run one full grid pass for callers that do not need to hold the
/// intermediate state.
pub fn render_grid<R, H>(
    schema: &RecordSchema<R>,
    hooks: H,
    records: Vec<R>,
    request: GridRequest,
) -> Result<GridView>
where
    H: GridHooks<R>,
{
    GridSource::new(schema, hooks, Some(records), request)
        .initialize()
        .map_err(Error::from)
}
