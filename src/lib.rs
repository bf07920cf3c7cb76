//! Load a delimited file into an in-memory [`frame::Table`], clean missing
//! values, apply per-value transforms to named columns, and render
//! head/tail previews for inspection.
//!
//! Column selection and renaming is driven by an external JSON
//! [`load::ColumnMap`] descriptor rather than literals in code, so a
//! source-schema change is a descriptor edit, not a code change.

pub mod clean;
pub mod error;
pub mod frame;
pub mod load;
pub mod render;

pub use error::{FrameError, Result};
pub use frame::{Table, Value};
