//! Derives ordered column descriptors from a record schema.

use gridsource_types::{ColumnDescriptor, RecordSchema};

/// Field key that marks the identifier column.
pub const PRIMARY_KEY_FIELD: &str = "Id";

/// Build the column list for one pass.
///
/// The identifier field is always included at order 0; other fields need
/// grid metadata to appear. An empty candidate sequence derives no
/// headers at all.
pub fn build_columns<R>(schema: &RecordSchema<R>, has_records: bool) -> Vec<ColumnDescriptor> {
    if !has_records {
        return Vec::new();
    }

    let mut columns = Vec::new();

    for field in schema.fields() {
        if field.key == PRIMARY_KEY_FIELD {
            columns.push(ColumnDescriptor {
                display_name: field.key.to_string(),
                field_key: field.key.to_string(),
                order: 0,
                is_primary_key: true,
                is_image_path: false,
            });
        } else if let Some(meta) = field.grid {
            // Image columns render their value out-of-band; no header text.
            let display_name = if meta.image_path {
                String::new()
            } else {
                field.display_name.unwrap_or(field.key).to_string()
            };

            columns.push(ColumnDescriptor {
                display_name,
                field_key: field.key.to_string(),
                order: meta.order,
                is_primary_key: false,
                is_image_path: meta.image_path,
            });
        }
    }

    if columns.len() > 1 {
        columns.sort_by_key(|column| column.order);
    }

    columns
}
