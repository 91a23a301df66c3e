//! Property-based tests for the full enumeration.

use proptest::prelude::*;

use cabinet_game::{binomial, run, CabinetId, Outcome, Placements, ScanSimulator};

/// Strategy: a small grid and a prize count that fits in it.
fn game_strategy() -> impl Strategy<Value = (i64, i64, i64)> {
    (1..=4i64, 1..=4i64).prop_flat_map(|(rows, columns)| {
        (Just(rows), Just(columns), 1..=rows * columns)
    })
}

/// Strategy: a square grid and a prize count that fits in it.
fn square_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1..=4i64).prop_flat_map(|side| (Just(side), 1..=side * side))
}

proptest! {
    // 1. One game per combination of prize cabinets
    #[test]
    fn total_is_binomial((rows, columns, k) in game_strategy()) {
        let scores = run(rows, columns, k, None).unwrap();
        let expected = binomial((rows * columns) as u64, k as u64).unwrap();
        prop_assert_eq!(expected, scores.total());
    }

    // 2. Counts always add up to the total
    #[test]
    fn counts_sum_to_total((rows, columns, k) in game_strategy()) {
        let scores = run(rows, columns, k, None).unwrap();
        let sum: u64 = Outcome::ALL.iter().map(|&o| scores.count(o)).sum();
        prop_assert_eq!(scores.total(), sum);
    }

    // 3. Ratios are probabilities
    #[test]
    fn ratios_are_probabilities((rows, columns, k) in game_strategy()) {
        let scores = run(rows, columns, k, None).unwrap();
        let mut sum = 0.0;
        for outcome in Outcome::ALL {
            let ratio = scores.ratio(outcome);
            prop_assert!((0.0..=1.0).contains(&ratio), "ratio={ratio} for {outcome}");
            sum += ratio;
        }
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum={sum}");
    }

    // 4. Mirroring a placement along the diagonal exchanges the players
    #[test]
    fn transpose_swaps_players((rows, columns, k) in game_strategy()) {
        let placements = Placements::from_dimensions(rows, columns, k).unwrap();
        let shape = placements.shape();
        let mut simulator = ScanSimulator::new(shape);
        let mut mirrored = ScanSimulator::new(shape.transposed());

        for selection in &placements {
            let mut transposed: Vec<CabinetId> =
                selection.iter().map(|&id| shape.transpose_cabinet(id)).collect();
            transposed.sort();

            let game = simulator.score(&selection).unwrap();
            let mirror = mirrored.score(&transposed).unwrap();
            prop_assert_eq!(game.player_one_step, mirror.player_two_step);
            prop_assert_eq!(game.player_two_step, mirror.player_one_step);
            prop_assert_eq!(game.outcome, mirror.outcome.swapped());
        }

        let scores = run(rows, columns, k, None).unwrap();
        let mirror_scores = run(columns, rows, k, None).unwrap();
        prop_assert_eq!(scores.count(Outcome::PlayerOneWin), mirror_scores.count(Outcome::PlayerTwoWin));
        prop_assert_eq!(scores.count(Outcome::PlayerTwoWin), mirror_scores.count(Outcome::PlayerOneWin));
        prop_assert_eq!(scores.count(Outcome::Draw), mirror_scores.count(Outcome::Draw));
    }

    // 5. On a square grid neither player has the edge
    #[test]
    fn square_grid_is_fair((side, k) in square_strategy()) {
        let scores = run(side, side, k, None).unwrap();
        prop_assert_eq!(scores.count(Outcome::PlayerOneWin), scores.count(Outcome::PlayerTwoWin));
    }

    // 6. Running twice gives the same tally
    #[test]
    fn run_is_deterministic((rows, columns, k) in game_strategy()) {
        prop_assert_eq!(run(rows, columns, k, None).unwrap(), run(rows, columns, k, None).unwrap());
    }

    // 7. Out of range parameters are rejected before any game is played
    #[test]
    fn rejects_bad_parameters(rows in -3..=4i64, columns in -3..=4i64, k in -3..=20i64) {
        let valid = rows > 0 && columns > 0 && k > 0 && k <= rows * columns;
        let mut games = 0u64;
        let mut count = |_: &cabinet_game::Game<'_>| games += 1;
        let result = run(rows, columns, k, Some(&mut count));
        prop_assert_eq!(valid, result.is_ok());
        if !valid {
            prop_assert_eq!(0, games);
        }
    }
}

#[test]
fn test_single_prize_two_by_two() {
    let mut simulator = ScanSimulator::from_dimensions(2, 2).unwrap();
    assert_eq!(&[1, 2, 3, 4], simulator.player_one_scan());
    assert_eq!(&[1, 3, 2, 4], simulator.player_two_scan());

    let expected = [
        Outcome::Draw,
        Outcome::PlayerOneWin,
        Outcome::PlayerTwoWin,
        Outcome::Draw,
    ];
    for (id, expected) in (1..=4).zip(expected) {
        let selection = [id];
        let game = simulator.score(&selection).unwrap();
        assert_eq!(Outcome::from_steps(game.player_one_step, game.player_two_step), game.outcome);
        assert_eq!(expected, game.outcome, "cabinet {}", id);
    }
}

#[test]
fn test_three_by_three_two_prizes() {
    let scores = run(3, 3, 2, None).unwrap();
    assert_eq!(36, scores.total());
    assert_eq!(scores.count(Outcome::PlayerOneWin), scores.count(Outcome::PlayerTwoWin));
}
