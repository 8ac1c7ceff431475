//! Re-exports of the core domain types.

pub use gridsource_types::{
    ColumnDescriptor, EnumTable, Extracted, FieldSpec, FieldValue, GridMeta, GridRequest, GridRow,
    GridView, PageSize, RecordSchema, RecordSchemaBuilder, RowAction, SortDirection,
};
