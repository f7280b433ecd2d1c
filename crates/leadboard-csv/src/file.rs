use crate::codec::{parse_csv, to_csv, ParsedCsv, UTF8_BOM};
use crate::error::{CsvError, Result};
use leadboard_core::Lead;
use std::fs;
use std::path::Path;

pub fn write_export(path: &Path, leads: &[Lead]) -> Result<()> {
    let mut contents = String::from(UTF8_BOM);
    contents.push_str(&to_csv(leads));
    fs::write(path, contents)?;
    Ok(())
}

/// Reads and parses a CSV file; a file without a single usable row is an error.
pub fn read_import(path: &Path) -> Result<ParsedCsv> {
    let text = fs::read_to_string(path)?;
    let parsed = parse_csv(&text);
    if parsed.leads.is_empty() {
        return Err(CsvError::NoRows);
    }
    Ok(parsed)
}
