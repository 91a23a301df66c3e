use crate::grid::{CabinetId, GridShape};

/// A searcher that opens cabinets in a fixed order.
pub trait Player {
    /// Every cabinet of `shape` exactly once, in the order this player opens them.
    fn scan_order(&self, shape: &GridShape) -> Vec<CabinetId>;

    fn name(&self) -> &'static str;
}
