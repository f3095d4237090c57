#![forbid(unsafe_code)]
//! Render tabular data read from CSV or JSON as a markdown pipe table.
//!
//! ```
//! use downtable::MarkdownTable;
//!
//! let mut table = MarkdownTable::new();
//! table.set_headers(vec!["h1".to_string(), "h2".to_string()]);
//! table.push_row(vec!["c1".to_string(), "c2".to_string()]).unwrap();
//! assert_eq!(
//!     table.to_markdown_string().unwrap(),
//!     "| h1  | h2    |\n|-------|-------|\n| c1    | c2    |\n"
//! );
//! ```

pub mod config;
pub mod datamodel;
pub mod error;
pub mod exporters;
pub mod importers;

pub use datamodel::{DecodedTable, MarkdownTable};
pub use error::TableError;
pub use importers::CsvOptions;
