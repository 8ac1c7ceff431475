//! Internal fixtures for gridsource tests.
//!
//! Sample record types with registered schemas, mirroring the admin
//! screens this engine backs: a user directory and a questionnaire list.

pub mod fixtures;

pub use fixtures::*;
