//! Editable cost tables and padding into square matrices.
//!
//! A [`RawTable`] is what a user or a CSV file provides: it may be ragged
//! and may have blank cells. [`RawTable::into_padded`] squares it with a
//! fill value and validates it into a [`CostMatrix`], remembering the
//! original extent so padded rows and columns can be dropped from results.

use munkres_model::{Assignment, Cost, CostMatrix};

use crate::error::{IngestError, Result};

/// Possibly ragged, possibly incomplete table of costs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<Option<Cost>>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<Option<Cost>>>) -> Self {
        Self { rows }
    }

    /// Table with every cell filled.
    pub fn from_costs(rows: Vec<Vec<Cost>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }

    /// Square table of blank cells, ready to be filled in.
    pub fn blank(size: usize) -> Self {
        Self {
            rows: vec![vec![None; size]; size],
        }
    }

    pub fn rows(&self) -> &[Vec<Option<Cost>>] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cost> {
        self.rows.get(row).and_then(|cells| cells.get(col).copied().flatten())
    }

    /// Edits one existing cell.
    pub fn set(&mut self, row: usize, col: usize, value: Option<Cost>) -> Result<()> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(IngestError::OutOfBounds { row, col })?;
        *cell = value;
        Ok(())
    }

    /// First blank cell in row-major order, among cells that exist.
    pub fn first_missing(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(Option::is_none)
                .map(|col| (row, col))
        })
    }

    /// True when the table is square and every cell has a value.
    pub fn is_filled(&self) -> bool {
        let size = self.height();
        size > 0
            && self.rows.iter().all(|cells| cells.len() == size)
            && self.first_missing().is_none()
    }

    /// Squares the table to `max(height, width)` with `pad_value`.
    ///
    /// Short rows are extended on the right and whole rows of
    /// `pad_value` are appended at the bottom. Blank cells inside the
    /// original extent stay blank.
    pub fn padded(&self, pad_value: Cost) -> RawTable {
        let size = self.height().max(self.width());
        let mut rows = Vec::with_capacity(size);
        for cells in &self.rows {
            let mut row = cells.clone();
            row.resize(size, Some(pad_value));
            rows.push(row);
        }
        rows.resize(size, vec![Some(pad_value); size]);
        RawTable { rows }
    }

    /// Pads, checks completeness and validates into a solver-ready matrix.
    pub fn into_padded(self, pad_value: Cost) -> Result<PaddedMatrix> {
        if self.is_empty() {
            return Err(IngestError::EmptyTable);
        }
        let original_rows = self.height();
        let original_cols = self.width();
        let square = self.padded(pad_value);
        if let Some((row, col)) = square.first_missing() {
            return Err(IngestError::MissingCell { row, col });
        }
        let rows: Vec<Vec<Cost>> = square
            .rows
            .into_iter()
            .map(|cells| cells.into_iter().flatten().collect())
            .collect();
        let matrix = CostMatrix::from_rows(rows)?;
        Ok(PaddedMatrix {
            matrix,
            original_rows,
            original_cols,
        })
    }
}

impl From<&CostMatrix> for RawTable {
    fn from(matrix: &CostMatrix) -> Self {
        RawTable::from_costs(matrix.to_rows())
    }
}

/// Square padding of a fully filled ragged table.
pub fn pad_rows(rows: Vec<Vec<Cost>>, pad_value: Cost) -> Vec<Vec<Cost>> {
    RawTable::from_costs(rows)
        .padded(pad_value)
        .rows
        .into_iter()
        .map(|cells| cells.into_iter().flatten().collect())
        .collect()
}

/// A square cost matrix together with the extent of the table it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMatrix {
    pub matrix: CostMatrix,
    pub original_rows: usize,
    pub original_cols: usize,
}

impl PaddedMatrix {
    /// Whether padding added any rows or columns.
    pub fn is_padded(&self) -> bool {
        self.original_rows != self.matrix.size() || self.original_cols != self.matrix.size()
    }

    /// Drops pairs that land in padded rows or columns.
    pub fn trim(&self, assignment: &Assignment) -> Assignment {
        assignment.within(self.original_rows, self.original_cols, &self.matrix)
    }
}
