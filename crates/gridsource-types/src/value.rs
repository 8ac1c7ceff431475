use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// Printable value extracted from one record field.
///
/// A registered accessor produces exactly one kind per field; cross-kind
/// comparison falls back to a fixed kind rank so ordering stays total.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Timestamp(DateTime<Utc>),
    Enum {
        type_name: String,
        variant: String,
    },
}

impl FieldValue {
    const fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Int(_) => 0,
            FieldValue::Float(_) => 1,
            FieldValue::Bool(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Timestamp(_) => 4,
            FieldValue::Enum { .. } => 5,
        }
    }

    /// Total ordering used by the sorter.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            (FieldValue::Enum { variant: a, .. }, FieldValue::Enum { variant: b, .. }) => a.cmp(b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Timestamp(v) => write!(f, "{}", v),
            FieldValue::Enum { variant, .. } => f.write_str(variant),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(v)
    }
}

/// Outcome of one field extraction.
///
/// Replaces blanket exception capture with an explicit result: only the
/// anticipated failures (missing field, absent optional, conversion
/// failure) are representable, and they render as an empty cell.
/// Errors elsewhere in the pass still propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Value(FieldValue),
    Unavailable,
}

impl Extracted {
    pub fn of(value: impl Into<FieldValue>) -> Self {
        Extracted::Value(value.into())
    }

    /// Absent optionals extract as `Unavailable`.
    pub fn opt<T: Into<FieldValue>>(value: Option<T>) -> Self {
        value.map_or(Extracted::Unavailable, Self::of)
    }

    pub fn value(&self) -> Option<&FieldValue> {
        match self {
            Extracted::Value(v) => Some(v),
            Extracted::Unavailable => None,
        }
    }

    /// Total ordering used by the sorter; `Unavailable` sorts before any value.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Extracted::Unavailable, Extracted::Unavailable) => Ordering::Equal,
            (Extracted::Unavailable, Extracted::Value(_)) => Ordering::Less,
            (Extracted::Value(_), Extracted::Unavailable) => Ordering::Greater,
            (Extracted::Value(a), Extracted::Value(b)) => a.compare(b),
        }
    }
}

impl From<FieldValue> for Extracted {
    fn from(value: FieldValue) -> Self {
        Extracted::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(
            FieldValue::Int(1).compare(&FieldValue::Int(2)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("b".into()).compare(&FieldValue::Text("a".into())),
            Ordering::Greater
        );

        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            FieldValue::Timestamp(earlier).compare(&FieldValue::Timestamp(later)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_cross_kind_is_total() {
        assert_eq!(
            FieldValue::Int(99).compare(&FieldValue::Text("a".into())),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("a".into()).compare(&FieldValue::Int(99)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_unavailable_sorts_first() {
        assert_eq!(
            Extracted::Unavailable.compare(&Extracted::of(0)),
            Ordering::Less
        );
        assert_eq!(
            Extracted::Unavailable.compare(&Extracted::Unavailable),
            Ordering::Equal
        );
    }

    #[test]
    fn test_display_text() {
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Text("hello".into()).to_string(), "hello");
        assert_eq!(
            FieldValue::Enum {
                type_name: "UserRole".into(),
                variant: "Admin".into(),
            }
            .to_string(),
            "Admin"
        );
    }

    #[test]
    fn test_opt_extraction() {
        assert_eq!(Extracted::opt(Some("x")), Extracted::of("x"));
        assert_eq!(Extracted::opt::<i64>(None), Extracted::Unavailable);
    }
}
