use super::TableImporter;
use crate::datamodel::{DecodedTable, MarkdownTable};
use crate::error::TableError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Decode a `{"Headers": [...], "Rows": [[...]]}` document.
pub fn decode_json_table<R: Read>(mut reader: R) -> Result<DecodedTable, TableError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let decoded: DecodedTable = serde_json::from_slice(&input)?;
    debug!(
        "Decoded JSON table with {} headers and {} rows",
        decoded.headers.len(),
        decoded.rows.len()
    );
    Ok(decoded)
}

/// Imports JSON input through [`MarkdownTable::load_json`]
pub struct JsonImporter;

impl TableImporter for JsonImporter {
    fn import(&self, input: &mut dyn Read, table: &mut MarkdownTable) -> Result<(), TableError> {
        table.load_json(input)
    }
}

impl MarkdownTable {
    /// Decode a JSON table and replace headers and rows with it.
    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<(), TableError> {
        let decoded = decode_json_table(reader)?;
        self.load_decoded(decoded);
        Ok(())
    }

    pub fn load_json_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), TableError> {
        let file = File::open(path)?;
        self.load_json(file)
    }
}
