use crate::datamodel::MarkdownTable;
use crate::error::TableError;
use std::io::Read;
use std::path::Path;

pub mod csv;
pub mod json;

pub use self::csv::{CsvImporter, CsvOptions, read_csv_matrix};
pub use self::json::{JsonImporter, decode_json_table};

pub trait TableImporter {
    fn import(&self, input: &mut dyn Read, table: &mut MarkdownTable) -> Result<(), TableError>;
}

pub fn get_importer_from_name(
    name: &str,
    options: CsvOptions,
) -> Result<Box<dyn TableImporter>, TableError> {
    match name {
        "csv" => Ok(Box::new(CsvImporter { options })),
        "json" => Ok(Box::new(JsonImporter)),
        _ => Err(TableError::UnsupportedFormat {
            format: name.to_string(),
        }),
    }
}

/// Pick an importer name from a file extension. Anything that is not `.json` is read as CSV.
pub fn importer_name_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => "json",
        _ => "csv",
    }
}
