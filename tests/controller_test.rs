//! Tests for the game controller state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe::{GameController, IgnoreReason, Mode, Phase, Transition};
use tictactoe_rules::{GameResult, Mark, Position, Square, check_winner, is_full};

fn controller() -> GameController {
    GameController::with_rng(Mark::O, StdRng::seed_from_u64(42))
}

fn started(mode: Mode) -> GameController {
    let mut controller = controller();
    assert!(controller.select_mode(mode).is_applied());
    assert!(controller.start().is_applied());
    controller
}

#[test]
fn test_initial_state() {
    let controller = controller();
    assert_eq!(controller.phase(), Phase::ModeSelect);
    assert_eq!(controller.mode(), Mode::TwoHuman);
    assert_eq!(controller.current_mark(), Mark::X);
    assert_eq!(controller.result(), GameResult::InProgress);
    assert!(!controller.is_started());
    assert!(controller.board().empty_positions().len() == 9);
}

#[test]
fn test_top_row_win_then_moves_ignored() {
    let mut controller = started(Mode::TwoHuman);

    let expected_marks = [Mark::X, Mark::O, Mark::X, Mark::O, Mark::X];
    for (index, mark) in [0, 4, 1, 3, 2].into_iter().zip(expected_marks) {
        assert_eq!(controller.current_mark(), mark);
        assert_eq!(controller.apply_move(index), Transition::Applied);
        assert_eq!(
            controller.board().get(Position::from_index(index).unwrap()),
            Square::Occupied(mark)
        );
    }

    assert_eq!(controller.result(), GameResult::Won(Mark::X));
    assert_eq!(controller.phase(), Phase::Finished);

    let board_before = controller.board().clone();
    let generation = controller.generation();
    assert_eq!(
        controller.apply_move(5),
        Transition::Ignored(IgnoreReason::WrongPhase(Phase::Finished))
    );
    assert_eq!(controller.board(), &board_before);
    assert_eq!(controller.generation(), generation);
}

#[test]
fn test_full_board_draw() {
    let mut controller = started(Mode::TwoHuman);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(controller.apply_move(index).is_applied());
    }

    assert!(is_full(controller.board()));
    assert_eq!(check_winner(controller.board()), None);
    assert_eq!(controller.result(), GameResult::Draw);
    assert_eq!(controller.phase(), Phase::Finished);
}

#[test]
fn test_occupied_square_ignored() {
    let mut controller = started(Mode::TwoHuman);
    controller.apply_move(4);

    assert_eq!(
        controller.apply_move(4),
        Transition::Ignored(IgnoreReason::Occupied(Position::Center))
    );
    assert_eq!(controller.current_mark(), Mark::O);
    assert_eq!(controller.board().get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_out_of_bounds_ignored() {
    let mut controller = started(Mode::TwoHuman);
    assert_eq!(
        controller.apply_move(9),
        Transition::Ignored(IgnoreReason::OutOfBounds(9))
    );
    assert_eq!(controller.current_mark(), Mark::X);
}

#[test]
fn test_moves_ignored_before_start() {
    let mut controller = controller();
    assert_eq!(
        controller.apply_move(0),
        Transition::Ignored(IgnoreReason::WrongPhase(Phase::ModeSelect))
    );
    assert!(controller.board().is_empty(Position::TopLeft));
}

#[test]
fn test_mode_and_start_only_in_mode_select() {
    let mut controller = started(Mode::HumanVsHeuristic);
    assert_eq!(
        controller.select_mode(Mode::TwoHuman),
        Transition::Ignored(IgnoreReason::WrongPhase(Phase::InProgress))
    );
    assert_eq!(
        controller.start(),
        Transition::Ignored(IgnoreReason::WrongPhase(Phase::InProgress))
    );
    assert_eq!(controller.mode(), Mode::HumanVsHeuristic);
}

#[test]
fn test_reset_from_finished() {
    let mut controller = started(Mode::HumanVsHeuristic);
    for index in [0, 4, 1, 3, 2] {
        controller.apply_move(index);
    }
    assert_eq!(controller.phase(), Phase::Finished);

    assert!(controller.reset().is_applied());
    assert_eq!(controller.phase(), Phase::ModeSelect);
    assert_eq!(controller.mode(), Mode::TwoHuman);
    assert_eq!(controller.current_mark(), Mark::X);
    assert_eq!(controller.result(), GameResult::InProgress);
    assert!(!controller.is_started());
    assert!(Position::ALL.iter().all(|p| controller.board().is_empty(*p)));
}

#[test]
fn test_auto_move_only_on_heuristic_turn() {
    let mut two_human = started(Mode::TwoHuman);
    two_human.apply_move(0);
    assert_eq!(two_human.pending_auto_move(), None);

    let mut vs = started(Mode::HumanVsHeuristic);
    assert_eq!(vs.pending_auto_move(), None);
    vs.apply_move(0);
    let ticket = vs.pending_auto_move().expect("heuristic should be due");
    assert_eq!(*ticket.mark(), Mark::O);
    assert_eq!(*ticket.generation(), vs.generation());
}

#[test]
fn test_fire_auto_move_takes_center() {
    let mut controller = started(Mode::HumanVsHeuristic);
    controller.apply_move(0);
    let ticket = controller.pending_auto_move().unwrap();

    assert!(controller.fire_auto_move(ticket).is_applied());
    assert_eq!(controller.board().get(Position::Center), Square::Occupied(Mark::O));
    assert_eq!(controller.current_mark(), Mark::X);
    assert_eq!(controller.pending_auto_move(), None);
}

#[test]
fn test_stale_ticket_discarded_after_reset() {
    let mut controller = started(Mode::HumanVsHeuristic);
    controller.apply_move(0);
    let ticket = controller.pending_auto_move().unwrap();

    controller.reset();
    controller.select_mode(Mode::HumanVsHeuristic);
    controller.start();
    controller.apply_move(8);

    assert_eq!(
        controller.fire_auto_move(ticket),
        Transition::Ignored(IgnoreReason::StaleTicket)
    );
    assert_eq!(controller.board().occupied_count(), 1);
}

#[test]
fn test_ticket_not_replayable() {
    let mut controller = started(Mode::HumanVsHeuristic);
    controller.apply_move(0);
    let ticket = controller.pending_auto_move().unwrap();

    assert!(controller.fire_auto_move(ticket).is_applied());
    assert_eq!(
        controller.fire_auto_move(ticket),
        Transition::Ignored(IgnoreReason::StaleTicket)
    );
    assert_eq!(controller.board().occupied_count(), 2);
}

#[test]
fn test_heuristic_playing_x_moves_first() {
    let mut controller = GameController::with_rng(Mark::X, StdRng::seed_from_u64(1));
    controller.select_mode(Mode::HumanVsHeuristic);
    controller.start();

    let ticket = controller.pending_auto_move().expect("X heuristic opens");
    controller.fire_auto_move(ticket);
    assert_eq!(controller.board().get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_heuristic_blocks_human() {
    let mut controller = started(Mode::HumanVsHeuristic);
    controller.apply_move(0); // X
    let ticket = controller.pending_auto_move().unwrap();
    controller.fire_auto_move(ticket); // O takes center
    controller.apply_move(1); // X threatens 2

    let ticket = controller.pending_auto_move().unwrap();
    controller.fire_auto_move(ticket);
    assert_eq!(controller.board().get(Position::TopRight), Square::Occupied(Mark::O));
}

#[test]
fn test_view_projection() {
    let mut controller = started(Mode::HumanVsHeuristic);
    controller.apply_move(4);
    let view = controller.view();

    assert_eq!(view.board(), controller.board());
    assert_eq!(*view.current_mark(), Mark::O);
    assert_eq!(*view.mode(), Mode::HumanVsHeuristic);
    assert_eq!(*view.phase(), Phase::InProgress);
    assert!(*view.started());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["current_mark"], "O");
}

#[test]
fn test_reachable_boards_have_at_most_one_winner() {
    use rand::seq::SliceRandom;
    use tictactoe_rules::rules::LINES;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut controller = started(Mode::TwoHuman);

        while controller.phase() == Phase::InProgress {
            let empty = controller.board().empty_positions();
            let pos = *empty.choose(&mut rng).unwrap();
            assert!(controller.apply_move(pos.to_index()).is_applied());

            let board = controller.board();
            let mut winners: Vec<Mark> = LINES
                .iter()
                .filter_map(|[a, b, c]| {
                    let mark = board.get(*a).mark()?;
                    (board.get(*b).mark() == Some(mark) && board.get(*c).mark() == Some(mark))
                        .then_some(mark)
                })
                .collect();
            winners.dedup();
            assert!(winners.len() <= 1, "seed {} produced {:?}", seed, winners);
            assert_eq!(winners.first().copied(), check_winner(board));
        }
    }
}

#[test]
fn test_apply_move_agrees_with_is_legal_move() {
    use rand::Rng;
    use tictactoe_rules::is_legal_move;

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut controller = started(Mode::TwoHuman);

        while controller.phase() == Phase::InProgress {
            let index: usize = rng.gen_range(0..9);
            let pos = Position::try_from(index).unwrap();
            let before = controller.board().clone();

            let transition = controller.apply_move(index);
            assert_eq!(transition.is_applied(), is_legal_move(&before, pos));
            if !transition.is_applied() {
                assert_eq!(transition, Transition::Ignored(IgnoreReason::Occupied(pos)));
                assert_eq!(controller.board(), &before);
            }
        }
    }
}
