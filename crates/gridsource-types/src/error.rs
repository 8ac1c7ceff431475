use std::fmt;

/// Result type for gridsource-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while running a grid pass
#[derive(Debug)]
pub enum Error {
    /// Requested sort field is not registered on the record type.
    ///
    /// This is a caller precondition violation and fails the pass loudly;
    /// a silent no-op would mask the caller bug.
    UnknownSortField {
        record: &'static str,
        field: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSortField { record, field } => {
                write!(f, "unknown sort field `{}` on record type {}", field, record)
            }
        }
    }
}

impl std::error::Error for Error {}
