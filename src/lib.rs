//! Exhaustive simulation of the cabinet game.
//!
//! K prizes are hidden in a grid of cabinets. Player one opens cabinets row by
//! row, player two column by column, and whoever opens a prize cabinet first
//! wins. Every possible placement of the prizes is played once and the
//! outcomes are tallied.

pub mod accumulator;
pub mod engine;
pub mod error;
pub mod grid;
pub mod placements;
pub mod players;
pub mod report;
pub mod simulation;

pub use accumulator::ScoreAccumulator;
pub use engine::{Game, Outcome, ScanSimulator};
pub use error::CabinetError;
pub use grid::{CabinetId, GridShape};
pub use placements::{binomial, Placements};
pub use report::report;
pub use simulation::run;
