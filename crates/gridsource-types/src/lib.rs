pub mod error;
pub mod grid;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use grid::*;
pub use schema::*;
pub use value::*;
