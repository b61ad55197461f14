//! Turn an uploaded `.xlsx`/`.xls`/`.csv` file into rows of string cells.

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::ImportError;

pub const ALLOWED_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];

/// Lower-cased extension of an uploaded file name, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Read the whole file as rows of cells. The caller has already checked
/// the extension against `ALLOWED_EXTENSIONS`.
pub fn read_rows(path: &Path, extension: &str) -> Result<Vec<Vec<String>>, ImportError> {
    match extension {
        "csv" => {
            let reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(path)?;
            read_csv_rows(reader)
        }
        "xlsx" | "xls" => {
            let mut workbook = open_workbook_auto(path)?;
            let range = workbook
                .worksheet_range_at(0)
                .ok_or(ImportError::EmptyWorkbook)??;
            Ok(range
                .rows()
                .map(|row| row.iter().map(cell_to_string).collect())
                .collect())
        }
        other => Err(ImportError::UnsupportedExtension(other.to_string())),
    }
}

fn read_csv_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Vec<String>>, ImportError> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

/// Excel stores most numbers as floats; whole numbers come back without a
/// trailing ".0" so ids and scores survive a round trip through a sheet.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
