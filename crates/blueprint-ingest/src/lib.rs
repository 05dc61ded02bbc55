//! Input side of the Blueprint export flows.
//!
//! # Features
//!
//! - **Sendaway sheets**: positional 20-column sheets, comma or tab delimited,
//!   with every malformed row reported
//! - **Candidate lists**: phenotips candidates, width checked by the caller
//! - **Line files**: phenotips exports and header templates, kept verbatim
//! - **Lookup tables**: the coversheet patient database
//! - **Report discovery**: `report*.pdf` files in a folder
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use blueprint_ingest::{Delimiter, read_sendaway_sheet};
//!
//! let sheet = read_sendaway_sheet(Path::new("200522_sendaways.csv"), Delimiter::Comma)?;
//! let records = sheet.into_records()?;
//! ```

mod candidates;
mod delimiter;
mod discovery;
mod error;
mod lines;
mod lookup;
mod sheet;

pub use candidates::read_candidate_list;
pub use delimiter::Delimiter;
pub use discovery::list_report_pdfs;
pub use error::{IngestError, Result};
pub use lines::read_lines_verbatim;
pub use lookup::read_lookup_table;
pub use sheet::{SendawaySheet, read_sendaway_sheet};
