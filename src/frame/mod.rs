pub mod table;
pub mod value;

pub use table::Table;
pub use value::{capitalize, TypeMismatch, Value};
