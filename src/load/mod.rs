pub mod mapping;
pub mod reader;

pub use mapping::ColumnMap;
pub use reader::{read_csv, read_csv_with_map, Header};
