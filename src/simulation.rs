use tracing::{info, trace};

use crate::accumulator::ScoreAccumulator;
use crate::engine::{Game, ScanSimulator};
use crate::error::Result;
use crate::placements::Placements;

/// Called once per scored game, before it is tallied.
pub type GameCallback<'c> = &'c mut dyn FnMut(&Game<'_>);

/// Plays every placement of `num_selections` prizes on a `rows` x `columns`
/// grid and tallies who finds a prize first.
///
/// All parameters are checked before the first placement is generated, so an
/// error never comes with a partial tally.
pub fn run(
    rows: i64,
    columns: i64,
    num_selections: i64,
    on_each_game: Option<GameCallback<'_>>,
) -> Result<ScoreAccumulator> {
    let placements = Placements::from_dimensions(rows, columns, num_selections)?;
    simulate(&placements, on_each_game)
}

pub fn simulate(
    placements: &Placements,
    mut on_each_game: Option<GameCallback<'_>>,
) -> Result<ScoreAccumulator> {
    let shape = placements.shape();
    info!(
        %shape,
        num_selections = placements.num_selections(),
        expected_games = ?placements.expected_count(),
        "enumerating placements"
    );

    let mut simulator = ScanSimulator::new(shape);
    let mut scores = ScoreAccumulator::new();
    for selection in placements {
        let game = simulator.score(&selection)?;
        trace!(%game, outcome = %game.outcome);
        if let Some(callback) = on_each_game.as_deref_mut() {
            callback(&game);
        }
        scores.record(game.outcome);
    }

    info!(%scores, games = scores.total(), "enumeration complete");
    Ok(scores)
}
