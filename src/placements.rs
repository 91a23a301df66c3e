use std::ops::RangeInclusive;

use itertools::structs::Combinations;
use itertools::Itertools;

use crate::error::{CabinetError, Result};
use crate::grid::{CabinetId, GridShape};

/// Every way of hiding `num_selections` prizes in the cabinets of a grid.
///
/// Nothing is generated up front. Each call to [`Placements::iter`] starts a
/// fresh pass from the first placement, and placements come out as ascending
/// cabinet ids in lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placements {
    shape: GridShape,
    num_selections: usize,
}

impl Placements {
    pub fn new(shape: GridShape, num_selections: i64) -> Result<Self> {
        if num_selections <= 0 {
            return Err(CabinetError::invalid(
                "num_selections",
                num_selections,
                "must be positive",
            ));
        }
        if num_selections > shape.cabinet_count() as i64 {
            return Err(CabinetError::invalid(
                "num_selections",
                num_selections,
                "exceeds the number of cabinets",
            ));
        }
        Ok(Placements {
            shape,
            num_selections: num_selections as usize,
        })
    }

    pub fn from_dimensions(rows: i64, columns: i64, num_selections: i64) -> Result<Self> {
        Placements::new(GridShape::new(rows, columns)?, num_selections)
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn num_selections(&self) -> usize {
        self.num_selections
    }

    /// Number of placements a full pass yields, or None if it overflows u64.
    pub fn expected_count(&self) -> Option<u64> {
        binomial(self.shape.cabinet_count() as u64, self.num_selections as u64)
    }

    pub fn iter(&self) -> PlacementIter {
        PlacementIter {
            combinations: (1..=self.shape.cabinet_count()).combinations(self.num_selections),
        }
    }
}

impl IntoIterator for &Placements {
    type Item = Vec<CabinetId>;
    type IntoIter = PlacementIter;

    fn into_iter(self) -> PlacementIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct PlacementIter {
    combinations: Combinations<RangeInclusive<CabinetId>>,
}

impl Iterator for PlacementIter {
    type Item = Vec<CabinetId>;

    fn next(&mut self) -> Option<Vec<CabinetId>> {
        self.combinations.next()
    }
}

/// n choose k. None on overflow.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1) here
        let wide = (result as u128) * ((n - i) as u128) / ((i + 1) as u128);
        result = u64::try_from(wide).ok()?;
    }
    Some(result)
}
