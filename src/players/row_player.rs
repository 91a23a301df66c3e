use crate::grid::{CabinetId, GridShape};
use crate::players::player::Player;

/// Player one: walks each row left to right, top row first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowScanPlayer;

impl Player for RowScanPlayer {
    fn scan_order(&self, shape: &GridShape) -> Vec<CabinetId> {
        (1..=shape.cabinet_count()).collect()
    }

    fn name(&self) -> &'static str {
        "row scan"
    }
}
