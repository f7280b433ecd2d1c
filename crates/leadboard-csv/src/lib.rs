pub mod codec;
pub mod error;
pub mod file;
pub mod import;

pub use codec::{export_filename, parse_csv, to_csv, ParsedCsv, UTF8_BOM};
pub use error::{CsvError, Result};
pub use file::{read_import, write_export};
pub use import::{import_csv, import_leads, ImportReport};
