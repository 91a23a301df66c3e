use std::fmt;

use crate::error::{CabinetError, Result};

/// Cabinets are numbered from 1, row by row.
pub type CabinetId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: u32,
    columns: u32,
}

impl GridShape {
    pub fn new(rows: i64, columns: i64) -> Result<Self> {
        let rows = checked_dimension("rows", rows)?;
        let columns = checked_dimension("columns", columns)?;
        if rows.checked_mul(columns).is_none() {
            return Err(CabinetError::invalid(
                "columns",
                columns as i64,
                "rows * columns does not fit in a cabinet id",
            ));
        }
        Ok(GridShape { rows, columns })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cabinet_count(&self) -> u32 {
        // Checked in new()
        self.rows * self.columns
    }

    pub fn contains(&self, cabinet: CabinetId) -> bool {
        (1..=self.cabinet_count()).contains(&cabinet)
    }

    /// Row and column of a cabinet, both 1-based.
    pub fn position_of(&self, cabinet: CabinetId) -> (u32, u32) {
        debug_assert!(self.contains(cabinet));
        let zero_based = cabinet - 1;
        (zero_based / self.columns + 1, zero_based % self.columns + 1)
    }

    /// Inverse of position_of.
    pub fn cabinet_at(&self, row: u32, column: u32) -> CabinetId {
        debug_assert!((1..=self.rows).contains(&row));
        debug_assert!((1..=self.columns).contains(&column));
        (row - 1) * self.columns + column
    }

    pub fn transposed(&self) -> GridShape {
        GridShape {
            rows: self.columns,
            columns: self.rows,
        }
    }

    /// Where `cabinet` lands once the grid is mirrored along its diagonal,
    /// numbered in the transposed grid.
    pub fn transpose_cabinet(&self, cabinet: CabinetId) -> CabinetId {
        let (row, column) = self.position_of(cabinet);
        self.transposed().cabinet_at(column, row)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

fn checked_dimension(name: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(CabinetError::invalid(name, value, "must be positive"));
    }
    u32::try_from(value).map_err(|_| CabinetError::invalid(name, value, "too large"))
}
