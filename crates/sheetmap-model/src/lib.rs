#![deny(unsafe_code)]

pub mod mapping;
pub mod sort;
pub mod table;
pub mod value;

pub use mapping::ColumnMapping;
pub use sort::{SortDirection, SortKey, SortState};
pub use table::Table;
pub use value::CellValue;
