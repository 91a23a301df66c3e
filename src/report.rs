use crate::accumulator::ScoreAccumulator;
use crate::engine::Outcome;

/// Summary printed after a run: the tally line followed by one ratio per
/// outcome. Ratios use `{:?}` so whole numbers keep their decimal point.
pub fn report(scores: &ScoreAccumulator) -> String {
    format!(
        "{}\nPlayer 1 win ratio: {:?}\nPlayer 2 win ratio: {:?}\nDraw ratio: {:?}\n",
        scores,
        scores.ratio(Outcome::PlayerOneWin),
        scores.ratio(Outcome::PlayerTwoWin),
        scores.ratio(Outcome::Draw)
    )
}
