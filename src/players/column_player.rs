use itertools::iproduct;

use crate::grid::{CabinetId, GridShape};
use crate::players::player::Player;

/// Player two: walks each column top to bottom, leftmost column first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnScanPlayer;

impl Player for ColumnScanPlayer {
    fn scan_order(&self, shape: &GridShape) -> Vec<CabinetId> {
        iproduct!(1..=shape.columns(), 0..shape.rows())
            .map(|(column, row)| column + row * shape.columns())
            .collect()
    }

    fn name(&self) -> &'static str {
        "column scan"
    }
}
