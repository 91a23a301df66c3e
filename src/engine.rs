use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::{CabinetError, Result};
use crate::grid::{CabinetId, GridShape};
use crate::players::{ColumnScanPlayer, Player, RowScanPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The row scan found a prize strictly earlier
    PlayerOneWin,
    /// The column scan found a prize strictly earlier
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::PlayerOneWin, Outcome::PlayerTwoWin, Outcome::Draw];

    pub fn from_steps(player_one_step: usize, player_two_step: usize) -> Outcome {
        match player_one_step.cmp(&player_two_step) {
            Ordering::Less => Outcome::PlayerOneWin,
            Ordering::Greater => Outcome::PlayerTwoWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// The same game seen with the players' roles exchanged.
    pub fn swapped(self) -> Outcome {
        match self {
            Outcome::PlayerOneWin => Outcome::PlayerTwoWin,
            Outcome::PlayerTwoWin => Outcome::PlayerOneWin,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Outcome::PlayerOneWin => 0,
            Outcome::PlayerTwoWin => 1,
            Outcome::Draw => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerOneWin => write!(f, "Player 1 wins"),
            Outcome::PlayerTwoWin => write!(f, "Player 2 wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One scored placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game<'a> {
    pub selection: &'a [CabinetId],
    pub player_one_step: usize,
    pub player_two_step: usize,
    pub outcome: Outcome,
}

impl fmt::Display for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Selection: {:?}, Player 1 finding step: {}, Player 2 finding step: {}",
            self.selection, self.player_one_step, self.player_two_step
        )
    }
}

/// Plays the row scan against the column scan on one grid shape.
///
/// Both scan orders are built once in [`ScanSimulator::new`] and reused for
/// every placement scored afterwards.
#[derive(Debug, Clone)]
pub struct ScanSimulator {
    shape: GridShape,
    player_one_scan: Vec<CabinetId>,
    player_two_scan: Vec<CabinetId>,
    // selected[id] is true while `id` holds a prize; index 0 is unused
    selected: Vec<bool>,
}

impl ScanSimulator {
    pub fn new(shape: GridShape) -> Self {
        let player_one_scan = RowScanPlayer.scan_order(&shape);
        let player_two_scan = ColumnScanPlayer.scan_order(&shape);
        debug!(
            %shape,
            player_one = RowScanPlayer.name(),
            player_two = ColumnScanPlayer.name(),
            "built scan orders"
        );
        debug_assert_eq!(player_one_scan.len(), shape.cabinet_count() as usize);
        debug_assert_eq!(player_two_scan.len(), shape.cabinet_count() as usize);

        ScanSimulator {
            shape,
            player_one_scan,
            player_two_scan,
            selected: vec![false; shape.cabinet_count() as usize + 1],
        }
    }

    pub fn from_dimensions(rows: i64, columns: i64) -> Result<Self> {
        Ok(ScanSimulator::new(GridShape::new(rows, columns)?))
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn player_one_scan(&self) -> &[CabinetId] {
        &self.player_one_scan
    }

    pub fn player_two_scan(&self) -> &[CabinetId] {
        &self.player_two_scan
    }

    /// Finds the step at which each player first opens a prize cabinet.
    pub fn score<'a>(&mut self, selection: &'a [CabinetId]) -> Result<Game<'a>> {
        if let Some(&bad) = selection.iter().find(|&&id| !self.shape.contains(id)) {
            return Err(CabinetError::invalid(
                "selection",
                bad as i64,
                "cabinet is outside the grid",
            ));
        }

        for &id in selection {
            self.selected[id as usize] = true;
        }
        let player_one_step = discovery_step(&self.player_one_scan, &self.selected);
        let player_two_step = discovery_step(&self.player_two_scan, &self.selected);
        for &id in selection {
            self.selected[id as usize] = false;
        }

        match (player_one_step, player_two_step) {
            (Some(player_one_step), Some(player_two_step)) => Ok(Game {
                selection,
                player_one_step,
                player_two_step,
                outcome: Outcome::from_steps(player_one_step, player_two_step),
            }),
            _ => Err(CabinetError::invalid(
                "selection",
                selection.len() as i64,
                "at least one cabinet must hold a prize",
            )),
        }
    }
}

fn discovery_step(scan: &[CabinetId], selected: &[bool]) -> Option<usize> {
    scan.iter().position(|&id| selected[id as usize])
}
