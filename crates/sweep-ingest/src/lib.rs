pub mod import;
pub mod table;

pub use import::{MAX_IMPORTS_PER_RUN, import_table};
pub use table::{ParseError, ParsedTable, parse_table, parse_table_from_reader};
