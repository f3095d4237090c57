use thiserror::Error;

/// Errors returned while building or rendering a markdown table
#[derive(Error, Debug)]
pub enum TableError {
    /// A row was appended whose cell count differs from the header count
    #[error("row length {row_len} does not match headers length {header_len}")]
    ShapeMismatch { row_len: usize, header_len: usize },

    #[error("provided rows are empty")]
    EmptyInput,

    /// Bulk input needs one header row and at least one data row
    #[error(
        "provided {rows} row(s), a table requires 1 row for headers and another row for items"
    )]
    InsufficientRows { rows: usize },

    #[error("markdown table headers are empty")]
    NoHeaders,

    #[error("markdown table has no rows")]
    NoRows,

    #[error("markdown table rows have no items, empty row count: {empty_rows}")]
    AllRowsEmpty { empty_rows: usize },

    /// A cell was appended to a row that does not exist
    #[error("row index {index} out of range for table with {rows} rows")]
    RowIndexOutOfRange { index: usize, rows: usize },

    #[error("line {line}: bare \" in non-quoted field")]
    BareQuote { line: usize },

    #[error("line {line}: extraneous or missing \" in quoted field")]
    ExtraneousQuote { line: usize },

    #[error("unsupported input format: {format}")]
    UnsupportedFormat { format: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
