// Engine module - the grid initialization pipeline
// This layer sits between record schemas (types) and the rendering collaborator

pub mod headers;
pub mod hooks;
pub mod materialize;
pub mod pager;
pub mod sorter;
mod source;

pub use headers::{PRIMARY_KEY_FIELD, build_columns};
pub use hooks::{GridHooks, PassThrough};
pub use materialize::build_rows;
pub use pager::PageBounds;
pub use sorter::SortState;
pub use source::GridSource;
