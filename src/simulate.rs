//! Headless heuristic-vs-heuristic games.
//!
//! The heuristic side chosen by configuration moves through the
//! controller's auto-move path. The other side calls the heuristic
//! directly and feeds its choice through `apply_move`, the way a click
//! would arrive.

use crate::controller::{GameController, Mode, Phase, Transition};
use derive_getters::Getters;
use derive_more::Display;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_rules::{GameResult, Mark, best_move};
use tracing::{debug, info, instrument, warn};

/// Tally of simulated games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Display)]
#[display("{} games: X won {}, O won {}, {} drawn", games, x_wins, o_wins, draws)]
pub struct SimulationReport {
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SimulationReport {
    fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::Won(Mark::X) => self.x_wins += 1,
            GameResult::Won(Mark::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => warn!("Recorded an unfinished game"),
        }
    }
}

/// Plays `games` games of the heuristic against itself.
///
/// The same `seed` always produces the same report.
#[instrument]
pub fn simulate(games: u32, seed: u64, opponent_mark: Mark) -> SimulationReport {
    let mut controller =
        GameController::with_rng(opponent_mark, StdRng::seed_from_u64(seed));
    let mut other_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut report = SimulationReport::default();

    for game in 0..games {
        controller.reset();
        controller.select_mode(Mode::HumanVsHeuristic);
        controller.start();

        while controller.phase() == Phase::InProgress {
            let transition = match controller.pending_auto_move() {
                Some(ticket) => controller.fire_auto_move(ticket),
                None => {
                    let mark = controller.current_mark();
                    match best_move(controller.board(), mark, &mut other_rng) {
                        Some(pos) => controller.apply_move(pos.to_index()),
                        None => break,
                    }
                }
            };
            if let Transition::Ignored(reason) = transition {
                warn!(game, reason = %reason, "Simulated move ignored");
                break;
            }
        }

        debug!(game, result = %controller.result(), "Game complete");
        report.record(controller.result());
    }

    info!(%report, "Simulation complete");
    report
}
