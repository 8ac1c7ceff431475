use std::collections::HashMap;
use std::fmt;

use crate::value::Extracted;

/// Grid annotation payload for one displayable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMeta {
    /// Relative column order; the identifier column is always 0.
    pub order: i32,
    /// Image-path columns carry their value out-of-band and render no header text.
    pub image_path: bool,
}

/// One declared field of a record type.
///
/// Fields without grid metadata stay registered (they can still be sorted
/// on) but never become display columns, except the `"Id"` identifier.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub display_name: Option<&'static str>,
    pub grid: Option<GridMeta>,
}

impl FieldSpec {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            display_name: None,
            grid: None,
        }
    }

    pub fn display_name(mut self, name: &'static str) -> Self {
        self.display_name = Some(name);
        self
    }

    /// Mark the field displayable at the given column order.
    pub fn grid(mut self, order: i32) -> Self {
        let image_path = self.grid.is_some_and(|meta| meta.image_path);
        self.grid = Some(GridMeta { order, image_path });
        self
    }

    /// Mark the field as an image-path column.
    pub fn image_path(mut self) -> Self {
        let order = self.grid.map_or(0, |meta| meta.order);
        self.grid = Some(GridMeta {
            order,
            image_path: true,
        });
        self
    }
}

/// Variant-to-description table for one enumerated type.
///
/// Populated at registration, queried by value when rendering cells.
#[derive(Debug, Clone, Default)]
pub struct EnumTable {
    entries: HashMap<&'static str, &'static str>,
}

impl EnumTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, variant: &'static str, description: &'static str) -> Self {
        self.entries.insert(variant, description);
        self
    }

    pub fn description(&self, variant: &str) -> Option<&'static str> {
        self.entries.get(variant).copied()
    }
}

/// Typed getter registered for one field key.
pub type Accessor<R> = Box<dyn Fn(&R) -> Extracted + Send + Sync>;

/// Per-record-type registry: ordered field declarations, typed accessors,
/// and enum description tables.
///
/// Built once per type and shared across render requests; replaces runtime
/// field reflection with registration-time metadata.
pub struct RecordSchema<R> {
    record: &'static str,
    fields: Vec<FieldSpec>,
    accessors: HashMap<&'static str, Accessor<R>>,
    enums: HashMap<&'static str, EnumTable>,
}

impl<R> RecordSchema<R> {
    pub fn builder(record: &'static str) -> RecordSchemaBuilder<R> {
        RecordSchemaBuilder {
            record,
            fields: Vec::new(),
            accessors: HashMap::new(),
            enums: HashMap::new(),
        }
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn accessor(&self, key: &str) -> Option<&Accessor<R>> {
        self.accessors.get(key)
    }

    /// Extract a field value; an unregistered key counts as a per-cell
    /// fault, not an error.
    pub fn extract(&self, key: &str, record: &R) -> Extracted {
        self.accessors
            .get(key)
            .map_or(Extracted::Unavailable, |accessor| accessor(record))
    }

    pub fn enum_description(&self, type_name: &str, variant: &str) -> Option<&'static str> {
        self.enums
            .get(type_name)
            .and_then(|table| table.description(variant))
    }
}

impl<R> fmt::Debug for RecordSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("record", &self.record)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

pub struct RecordSchemaBuilder<R> {
    record: &'static str,
    fields: Vec<FieldSpec>,
    accessors: HashMap<&'static str, Accessor<R>>,
    enums: HashMap<&'static str, EnumTable>,
}

impl<R> RecordSchemaBuilder<R> {
    /// Declare a field and register its accessor.
    pub fn field<F>(mut self, spec: FieldSpec, accessor: F) -> Self
    where
        F: Fn(&R) -> Extracted + Send + Sync + 'static,
    {
        self.accessors.insert(spec.key, Box::new(accessor));
        self.fields.push(spec);
        self
    }

    pub fn enum_table(mut self, type_name: &'static str, table: EnumTable) -> Self {
        self.enums.insert(type_name, table);
        self
    }

    pub fn build(self) -> RecordSchema<R> {
        RecordSchema {
            record: self.record,
            fields: self.fields,
            accessors: self.accessors,
            enums: self.enums,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    struct Item {
        id: i64,
        label: String,
    }

    fn item_schema() -> RecordSchema<Item> {
        RecordSchema::builder("Item")
            .field(FieldSpec::new("Id"), |item: &Item| Extracted::of(item.id))
            .field(
                FieldSpec::new("Label").display_name("Label").grid(1),
                |item: &Item| Extracted::of(item.label.clone()),
            )
            .enum_table("ItemState", EnumTable::new().with("New", "Freshly added"))
            .build()
    }

    #[test]
    fn test_extract_registered_field() {
        let schema = item_schema();
        let item = Item {
            id: 7,
            label: "widget".into(),
        };

        assert_eq!(schema.extract("Id", &item), Extracted::of(7i64));
        assert_eq!(
            schema.extract("Label", &item),
            Extracted::Value(FieldValue::Text("widget".into()))
        );
    }

    #[test]
    fn test_extract_unknown_field_is_unavailable() {
        let schema = item_schema();
        let item = Item {
            id: 1,
            label: "x".into(),
        };

        assert_eq!(schema.extract("Missing", &item), Extracted::Unavailable);
    }

    #[test]
    fn test_enum_description_lookup() {
        let schema = item_schema();

        assert_eq!(
            schema.enum_description("ItemState", "New"),
            Some("Freshly added")
        );
        assert_eq!(schema.enum_description("ItemState", "Archived"), None);
        assert_eq!(schema.enum_description("OtherEnum", "New"), None);
    }

    #[test]
    fn test_field_spec_image_path_keeps_order() {
        let spec = FieldSpec::new("Thumbnail").grid(5).image_path();
        let meta = spec.grid.unwrap();

        assert_eq!(meta.order, 5);
        assert!(meta.image_path);
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = item_schema();
        let keys: Vec<_> = schema.fields().iter().map(|f| f.key).collect();

        assert_eq!(keys, vec!["Id", "Label"]);
    }
}
