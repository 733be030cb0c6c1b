//! Delimited-text persistence for raw cost tables.
//!
//! Files hold only the raw, un-reduced costs: one table row per line, no
//! header, blank fields for cells that have not been filled in.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use munkres_model::{Cost, CostMatrix};

use crate::error::{IngestError, Result};
use crate::table::RawTable;

/// Options for reading and writing cost tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Value used to square ragged tables.
    pub pad_value: Cost,
    /// Whether to trim whitespace around fields before parsing.
    pub trim: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            pad_value: 0,
            trim: true,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_pad_value(mut self, pad_value: Cost) -> Self {
        self.pad_value = pad_value;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Reads a cost table from a file.
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table_from_reader(file, options)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        cols = table.width(),
        "loaded cost table"
    );
    Ok(table)
}

/// Reads a cost table from any reader.
pub fn read_table_from_reader<R: Read>(reader: R, options: &IngestOptions) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, field)| parse_cell(row, col, field, options.trim))
            .collect::<Result<Vec<_>>>()?;
        rows.push(cells);
    }
    Ok(RawTable::new(rows))
}

fn parse_cell(row: usize, col: usize, field: &str, trim: bool) -> Result<Option<Cost>> {
    let mut value = field.trim_start_matches('\u{feff}');
    if trim {
        value = value.trim();
    }
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<Cost>()
        .map(Some)
        .map_err(|_| IngestError::InvalidCell {
            row,
            col,
            value: value.to_string(),
        })
}

/// Writes a cost table to a file, replacing it.
pub fn write_table(path: &Path, table: &RawTable, options: &IngestOptions) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_table_to_writer(file, table, options)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        cols = table.width(),
        "saved cost table"
    );
    Ok(())
}

/// Writes a cost table to any writer.
pub fn write_table_to_writer<W: Write>(
    writer: W,
    table: &RawTable,
    options: &IngestOptions,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_writer(writer);
    for cells in table.rows() {
        writer.write_record(
            cells
                .iter()
                .map(|cell| cell.map(|value| value.to_string()).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a complete cost matrix to a file.
pub fn write_matrix(path: &Path, matrix: &CostMatrix, options: &IngestOptions) -> Result<()> {
    write_table(path, &RawTable::from(matrix), options)
}
