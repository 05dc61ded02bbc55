//! Output side of the Blueprint export flows.

pub mod coversheet;
pub mod export_table;
pub mod pdf;
pub mod phenotype_files;

pub use coversheet::write_report_with_coversheet;
pub use export_table::{EXPORT_FILE_NAME, write_export_table, write_export_table_to};
pub use pdf::{CommandLineBackend, PdfBackend, PdfTools};
pub use phenotype_files::write_phenotype_files;
