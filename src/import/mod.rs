mod csv_import;
mod detect;

pub use csv_import::{CsvImporter, ImportReport, RowError};
pub use detect::{detect_bank_format, BankProfile};
