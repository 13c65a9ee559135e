//! Struct `Table` represents a table of categorical rows.

pub mod table;
pub mod reader;


pub use reader::TableReader;
pub use table::Table;
