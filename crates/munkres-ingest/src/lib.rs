//! Cost table ingestion for the assignment solver.
//!
//! # Features
//!
//! - **CSV persistence**: read and write raw integer tables, blank fields for unfilled cells
//! - **Padding**: square ragged tables with a fill value
//! - **Validation**: refuse incomplete tables before they reach the solver
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use munkres_ingest::{IngestOptions, read_table};
//!
//! let options = IngestOptions::default();
//! let table = read_table(Path::new("costs.csv"), &options)?;
//! let padded = table.into_padded(options.pad_value)?;
//! println!("{}x{} matrix", padded.matrix.size(), padded.matrix.size());
//! # Ok::<(), munkres_ingest::IngestError>(())
//! ```

mod csv_matrix;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tables and Padding ===
pub use table::{PaddedMatrix, RawTable, pad_rows};

// === CSV Reading / Writing ===
pub use csv_matrix::{
    IngestOptions, read_table, read_table_from_reader, write_matrix, write_table,
    write_table_to_writer,
};
