//! Converts records in the current view into rows of printable cells.

use gridsource_types::{ColumnDescriptor, Extracted, FieldValue, GridRow, RecordSchema};

/// Materialize every record against the column list, in column order.
///
/// A per-cell extraction fault never drops the row: a plain column gets
/// an empty cell, the primary key keeps its default, the image path stays
/// absent.
pub fn build_rows<R>(
    schema: &RecordSchema<R>,
    columns: &[ColumnDescriptor],
    records: &[R],
) -> Vec<GridRow> {
    records
        .iter()
        .map(|record| build_row(schema, columns, record))
        .collect()
}

fn build_row<R>(schema: &RecordSchema<R>, columns: &[ColumnDescriptor], record: &R) -> GridRow {
    let mut row = GridRow {
        primary_key: 0,
        image_path: None,
        cells: Vec::new(),
        actions: Vec::new(),
    };

    for column in columns {
        let extracted = schema.extract(&column.field_key, record);

        if column.is_primary_key {
            if let Extracted::Value(FieldValue::Int(id)) = extracted {
                row.primary_key = id;
            }
        } else if column.is_image_path {
            if let Extracted::Value(value) = extracted {
                row.image_path = Some(render_text(schema, &value));
            }
        } else {
            match extracted {
                Extracted::Value(value) => row.cells.push(render_text(schema, &value)),
                Extracted::Unavailable => row.cells.push(String::new()),
            }
        }
    }

    row
}

/// Enumerated values render through the schema's description table,
/// falling back to the raw variant identifier; everything else renders
/// via its display text.
fn render_text<R>(schema: &RecordSchema<R>, value: &FieldValue) -> String {
    match value {
        FieldValue::Enum { type_name, variant } => {
            match schema.enum_description(type_name, variant) {
                Some(description) => description.to_string(),
                None => variant.clone(),
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::build_columns;
    use gridsource_types::{EnumTable, FieldSpec};

    #[derive(Debug, Clone, Copy)]
    enum TicketState {
        Open,
        Closed,
    }

    impl TicketState {
        fn variant(self) -> &'static str {
            match self {
                TicketState::Open => "Open",
                TicketState::Closed => "Closed",
            }
        }
    }

    struct Ticket {
        id: i64,
        subject: String,
        state: TicketState,
        attachment: Option<String>,
        assignee: Option<String>,
    }

    fn ticket_schema() -> RecordSchema<Ticket> {
        RecordSchema::builder("Ticket")
            .field(FieldSpec::new("Id"), |t: &Ticket| Extracted::of(t.id))
            .field(
                FieldSpec::new("Subject").display_name("Subject").grid(1),
                |t: &Ticket| Extracted::of(t.subject.clone()),
            )
            .field(
                FieldSpec::new("State").display_name("State").grid(2),
                |t: &Ticket| {
                    Extracted::Value(FieldValue::Enum {
                        type_name: "TicketState".into(),
                        variant: t.state.variant().into(),
                    })
                },
            )
            .field(FieldSpec::new("Assignee").grid(3), |t: &Ticket| {
                Extracted::opt(t.assignee.clone())
            })
            .field(
                FieldSpec::new("Attachment").grid(9).image_path(),
                |t: &Ticket| Extracted::opt(t.attachment.clone()),
            )
            .enum_table(
                "TicketState",
                EnumTable::new().with("Open", "Awaiting triage"),
            )
            .build()
    }

    fn ticket(id: i64, subject: &str, state: TicketState) -> Ticket {
        Ticket {
            id,
            subject: subject.to_string(),
            state,
            attachment: None,
            assignee: Some("ops".to_string()),
        }
    }

    #[test]
    fn test_row_carries_primary_key_out_of_band() {
        let schema = ticket_schema();
        let columns = build_columns(&schema, true);
        let rows = build_rows(&schema, &columns, &[ticket(12, "broken build", TicketState::Open)]);

        assert_eq!(rows[0].primary_key, 12);
        // Id and Attachment are not cells: Subject, State, Assignee remain.
        assert_eq!(rows[0].cells.len(), 3);
        assert_eq!(rows[0].cells[0], "broken build");
    }

    #[test]
    fn test_enum_cell_uses_description() {
        let schema = ticket_schema();
        let columns = build_columns(&schema, true);
        let rows = build_rows(&schema, &columns, &[ticket(1, "x", TicketState::Open)]);

        assert_eq!(rows[0].cells[1], "Awaiting triage");
    }

    #[test]
    fn test_enum_without_description_falls_back_to_variant() {
        let schema = ticket_schema();
        let columns = build_columns(&schema, true);
        let rows = build_rows(&schema, &columns, &[ticket(1, "x", TicketState::Closed)]);

        assert_eq!(rows[0].cells[1], "Closed");
    }

    #[test]
    fn test_unavailable_field_becomes_empty_cell() {
        let schema = ticket_schema();
        let columns = build_columns(&schema, true);

        let mut unassigned = ticket(1, "x", TicketState::Open);
        unassigned.assignee = None;

        let rows = build_rows(&schema, &columns, &[unassigned]);

        assert_eq!(rows[0].cells[2], "");
        assert_eq!(rows[0].cells.len(), 3);
    }

    #[test]
    fn test_image_column_fills_image_path_not_cells() {
        let schema = ticket_schema();
        let columns = build_columns(&schema, true);

        let mut with_shot = ticket(1, "x", TicketState::Open);
        with_shot.attachment = Some("/img/shot.png".to_string());

        let rows = build_rows(&schema, &columns, &[with_shot]);

        assert_eq!(rows[0].image_path.as_deref(), Some("/img/shot.png"));
        assert_eq!(rows[0].cells.len(), 3);
    }

    #[test]
    fn test_failed_primary_key_keeps_default_and_row() {
        let schema: RecordSchema<Ticket> = RecordSchema::builder("Ticket")
            .field(FieldSpec::new("Id"), |_: &Ticket| Extracted::Unavailable)
            .field(FieldSpec::new("Subject").grid(1), |t: &Ticket| {
                Extracted::of(t.subject.clone())
            })
            .build();

        let columns = build_columns(&schema, true);
        let rows = build_rows(&schema, &columns, &[ticket(9, "kept", TicketState::Open)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary_key, 0);
        assert_eq!(rows[0].cells, vec!["kept".to_string()]);
    }
}
