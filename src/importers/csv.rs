use super::TableImporter;
use crate::datamodel::MarkdownTable;
use crate::error::TableError;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reader options for CSV input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    /// Accept stray `"` characters instead of failing on them
    pub lazy_quotes: bool,
    /// Strip leading whitespace from every field
    pub trim_leading_space: bool,
}

/// Read all CSV records into a matrix. The first record is expected to hold the headers.
///
/// Input that is not valid UTF-8 is decoded lossily.
pub fn read_csv_matrix<R: Read>(
    mut reader: R,
    options: CsvOptions,
) -> Result<Vec<Vec<String>>, TableError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let input = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = input {
        warn!("CSV input is not valid UTF-8, invalid sequences were replaced");
    }

    let normalized = normalize_quotes(&input, options)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(normalized.as_bytes());

    let mut matrix = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = record.iter().map(|field| field.to_string()).collect::<Vec<_>>();
        matrix.push(row);
    }

    debug!("Read {} CSV records", matrix.len());
    Ok(matrix)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Rewrite raw CSV text so the parser sees what the options ask for.
///
/// With `trim_leading_space`, whitespace at the start of a field is dropped before the
/// field is classified as quoted or not. Strict mode rejects a `"` inside an unquoted
/// field and a `"` inside a quoted field that is neither doubled nor closing the field.
/// Lazy mode keeps such quotes as literal characters.
fn normalize_quotes(input: &str, options: CsvOptions) -> Result<String, TableError> {
    let mut output = String::with_capacity(input.len());
    let mut line = 1;
    let mut state = QuoteState::FieldStart;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let line_end = c == '\n' || (c == '\r' && chars.peek() == Some(&'\n'));
        state = match (state, c) {
            (QuoteState::Quoted, '"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, '"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, '\r') if line_end => QuoteState::QuoteInQuoted,
            (QuoteState::QuoteInQuoted, ',' | '\n') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, _) => {
                if !options.lazy_quotes {
                    return Err(TableError::ExtraneousQuote { line });
                }
                // Double the stray quote so it survives parsing
                output.push('"');
                QuoteState::Quoted
            }
            (QuoteState::FieldStart, '"') => QuoteState::Quoted,
            (QuoteState::Unquoted, '"') if !options.lazy_quotes => {
                return Err(TableError::BareQuote { line });
            }
            (_, ',' | '\n') => QuoteState::FieldStart,
            (QuoteState::FieldStart, '\r') if line_end => QuoteState::FieldStart,
            (QuoteState::FieldStart, c) if options.trim_leading_space && c.is_whitespace() => {
                continue;
            }
            (_, _) => QuoteState::Unquoted,
        };
        output.push(c);
        if c == '\n' {
            line += 1;
        }
    }

    if state == QuoteState::Quoted && !options.lazy_quotes {
        return Err(TableError::ExtraneousQuote { line });
    }
    Ok(output)
}

/// Imports CSV input through [`MarkdownTable::load_csv`]
pub struct CsvImporter {
    pub options: CsvOptions,
}

impl TableImporter for CsvImporter {
    fn import(&self, input: &mut dyn Read, table: &mut MarkdownTable) -> Result<(), TableError> {
        table.load_csv(input, self.options)
    }
}

impl MarkdownTable {
    /// Read CSV records and load them with [`MarkdownTable::load_matrix`].
    pub fn load_csv<R: Read>(&mut self, reader: R, options: CsvOptions) -> Result<(), TableError> {
        let matrix = read_csv_matrix(reader, options)?;
        self.load_matrix(matrix)
    }

    pub fn load_csv_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: CsvOptions,
    ) -> Result<(), TableError> {
        let file = File::open(path)?;
        self.load_csv(file, options)
    }
}
