pub mod decoded_table;
pub mod table;

pub use decoded_table::DecodedTable;
pub use table::MarkdownTable;
