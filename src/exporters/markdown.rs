use crate::datamodel::MarkdownTable;
use crate::error::TableError;
use std::io::Write;
use tracing::debug;

const HEADER_SEPARATOR: &str = "  | ";
const ROW_SEPARATOR: &str = "    | ";
const LINE_END: &str = "    |\n";
const COLUMN_RULE: &str = "|-------";

/// Converter for table data to markdown pipe-table format
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Render headers and rows as a markdown pipe table.
    ///
    /// Rows without cells are skipped, but if every row is empty the render fails.
    /// Cell counts are not compared with the header count.
    pub fn to_markdown<S: AsRef<str>>(
        headers: &[S],
        rows: &[Vec<S>],
    ) -> Result<String, TableError> {
        if headers.is_empty() {
            return Err(TableError::NoHeaders);
        }
        if rows.is_empty() {
            return Err(TableError::NoRows);
        }

        let mut markdown = String::new();
        Self::push_line(&mut markdown, headers, HEADER_SEPARATOR);

        for _ in headers {
            markdown.push_str(COLUMN_RULE);
        }
        markdown.push_str("|\n");

        let mut empty_rows = 0;
        for row in rows {
            if row.is_empty() {
                empty_rows += 1;
                continue;
            }
            Self::push_line(&mut markdown, row, ROW_SEPARATOR);
        }

        if empty_rows == rows.len() {
            return Err(TableError::AllRowsEmpty { empty_rows });
        }
        if empty_rows > 0 {
            debug!("Skipped {} empty rows while rendering table", empty_rows);
        }
        Ok(markdown)
    }

    fn push_line<S: AsRef<str>>(markdown: &mut String, cells: &[S], separator: &str) {
        markdown.push_str("| ");
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                markdown.push_str(separator);
            }
            markdown.push_str(cell.as_ref());
        }
        markdown.push_str(LINE_END);
    }
}

impl MarkdownTable {
    pub fn to_markdown_string(&self) -> Result<String, TableError> {
        MarkdownConverter::to_markdown(self.headers(), self.rows())
    }

    pub fn to_markdown_bytes(&self) -> Result<Vec<u8>, TableError> {
        self.to_markdown_string().map(String::into_bytes)
    }

    /// Render the table into `writer` and return the number of bytes written.
    /// Nothing is written when rendering fails.
    pub fn write_markdown<W: Write>(&self, writer: &mut W) -> Result<usize, TableError> {
        let markdown = self.to_markdown_string()?;
        writer.write_all(markdown.as_bytes())?;
        writer.flush()?;
        Ok(markdown.len())
    }

    /// Render the table to standard output and return the number of bytes written.
    pub fn print_markdown(&self) -> Result<usize, TableError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_markdown(&mut handle)
    }
}
