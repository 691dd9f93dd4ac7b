//! Board integration tests: setup, dice, move application, undo and pips.

use rust_backgammon::core::{Board, Color, EngineError, Move, MoveKind, SlotId};
use rust_backgammon::GameStatus;

fn play_first_moves(board: &mut Board, count: usize) {
    for _ in 0..count {
        board.search_for_valid_moves();
        board.move_by_index(0).unwrap();
    }
}

// =============================================================================
// Setup Tests
// =============================================================================

#[test]
fn test_standard_layout() {
    let board = Board::new_standard_game();
    let amounts = board.amount_array();
    let colors = board.color_array();

    for (slot, color, count) in [
        (1, Color::White, 2),
        (12, Color::White, 5),
        (17, Color::White, 3),
        (19, Color::White, 5),
        (6, Color::Black, 5),
        (8, Color::Black, 3),
        (13, Color::Black, 5),
        (24, Color::Black, 2),
    ] {
        assert_eq!(amounts[slot], count, "slot {slot}");
        assert_eq!(colors[slot], Some(color), "slot {slot}");
    }

    assert_eq!(colors[0], Some(Color::White));
    assert_eq!(colors[25], Some(Color::Black));
    assert_eq!(colors[26], Some(Color::White));
    assert_eq!(colors[27], Some(Color::Black));
    assert_eq!(colors[2], None);
    assert_eq!(board.checker_total(Color::White), 15);
    assert_eq!(board.checker_total(Color::Black), 15);
}

#[test]
fn test_slot_out_of_range() {
    let board = Board::new_standard_game();
    assert_eq!(board.slot(28), Err(EngineError::InvalidSlot { slot: 28 }));
    assert_eq!(board.slot(19).unwrap().count, 5);
}

// =============================================================================
// Dice Tests
// =============================================================================

#[test]
fn test_add_dice_appends() {
    let mut board = Board::new_standard_game();
    board.set_dices([3, 4]).unwrap();
    board.add_dice(8).unwrap();

    assert_eq!(board.dices(), &[3, 4, 8]);
}

#[test]
fn test_add_dice_stops_at_four() {
    let mut board = Board::new_standard_game();
    board.set_dices([3, 4]).unwrap();
    board.add_dice(1).unwrap();
    board.add_dice(2).unwrap();

    assert_eq!(
        board.add_dice(6),
        Err(EngineError::TooManyDice { max: 4 })
    );
    assert_eq!(board.dices(), &[3, 4, 1, 2]);
}

#[test]
fn test_doubles_give_four_dice() {
    let mut board = Board::new_standard_game();
    board.set_dices([5, 5]).unwrap();
    assert_eq!(board.dices(), &[5, 5, 5, 5]);
}

#[test]
fn test_zero_die_rejected() {
    let mut board = Board::new_standard_game();
    assert_eq!(
        board.set_dices([0, 3]),
        Err(EngineError::InvalidDie { value: 0 })
    );
}

// =============================================================================
// Undo Tests
// =============================================================================

#[test]
fn test_undo_recovers_dice() {
    let mut board = Board::new_standard_game();
    board.set_players(true);
    board.set_dices([4, 8]).unwrap();
    board.search_for_valid_moves();

    let played = board.move_by_index(0).unwrap();
    assert_eq!(played.pips(), 4);
    assert_eq!(board.dices(), &[8]);

    board.apply(&played.undo().unwrap()).unwrap();
    assert_eq!(board.recover_dice_for_undo(), Ok(4));

    assert_eq!(board.dices(), &[8, 4]);
    assert_eq!(board.amount_array(), Board::new_standard_game().amount_array());
}

#[test]
fn test_recover_with_empty_cache_is_noop() {
    let mut board = Board::new_standard_game();
    board.set_dices([2, 1]).unwrap();

    assert_eq!(board.recover_dice_for_undo(), Err(EngineError::NothingToUndo));
    assert_eq!(board.dices(), &[2, 1]);
}

#[test]
fn test_undo_capture_restores_blot() {
    let mut board = Board::empty();
    board.place(1, Color::White, 2).unwrap();
    board.place(4, Color::Black, 1).unwrap();
    board.set_dices([3, 5]).unwrap();
    board.search_for_valid_moves();

    let hit = Move::capture(SlotId::new(1), SlotId::new(4), 3);
    assert!(board.valid_moves().contains(&hit));
    board.apply(&hit).unwrap();
    assert_eq!(board.slot(25).unwrap().count, 1);

    let undo = hit.undo().unwrap();
    assert_eq!(undo.kind(), MoveKind::Undo { capture: true });
    board.apply(&undo).unwrap();
    board.recover_dice_for_undo().unwrap();

    assert_eq!(board.slot(4).unwrap().owner, Some(Color::Black));
    assert_eq!(board.slot(4).unwrap().count, 1);
    assert_eq!(board.slot(1).unwrap().count, 2);
    assert_eq!(board.slot(25).unwrap().count, 0);
    assert_eq!(board.dices(), &[5, 3]);
}

// =============================================================================
// Pip Count Tests
// =============================================================================

#[test]
fn test_starting_counts() {
    let board = Board::new_standard_game();
    assert_eq!(board.count_white(), 167);
    assert_eq!(board.count_black(), 167);
}

#[test]
fn test_black_count_after_four_six() {
    let mut board = Board::new_standard_game();
    board.set_players(false);
    board.set_dices([4, 6]).unwrap();

    play_first_moves(&mut board, 2);

    assert_eq!(board.count_black(), 157);
    assert_eq!(board.count_white(), 167);
    assert!(!board.is_dices_left());
}

#[test]
fn test_black_count_after_double_six() {
    let mut board = Board::new_standard_game();
    board.set_players(false);
    board.set_dices([6, 6]).unwrap();

    play_first_moves(&mut board, 4);

    assert_eq!(board.count_black(), 143);
    assert_eq!(board.checker_total(Color::Black), 15);
}

// =============================================================================
// Rule Tests
// =============================================================================

#[test]
fn test_bar_checker_must_enter_first() {
    let mut board = Board::empty();
    board.place(0, Color::White, 1).unwrap();
    board.place(12, Color::White, 14).unwrap();
    board.place(13, Color::Black, 15).unwrap();
    board.set_dices([3, 1]).unwrap();

    let moves = board.search_for_valid_moves().to_vec();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from() == SlotId::WHITE_BAR));

    let early = Move::normal(SlotId::new(12), SlotId::new(15), 3);
    assert!(matches!(
        board.apply(&early),
        Err(EngineError::IllegalMove { .. })
    ));
}

#[test]
fn test_black_enters_from_own_bar() {
    let mut board = Board::empty();
    board.place(25, Color::Black, 1).unwrap();
    board.place(6, Color::Black, 14).unwrap();
    board.place(12, Color::White, 15).unwrap();
    board.set_players(false);
    board.set_dices([2, 5]).unwrap();

    let moves = board.search_for_valid_moves();
    assert!(moves.contains(&Move::normal(SlotId::BLACK_BAR, SlotId::new(23), 2)));
    assert!(moves.contains(&Move::normal(SlotId::BLACK_BAR, SlotId::new(20), 5)));
    assert!(moves.iter().all(|m| m.from() == SlotId::BLACK_BAR));
}

#[test]
fn test_no_moves_on_closed_board() {
    let mut board = Board::empty();
    board.place(0, Color::White, 1).unwrap();
    board.place(19, Color::White, 14).unwrap();
    for point in 1..=6 {
        board.place(point, Color::Black, 2).unwrap();
    }
    board.place(7, Color::Black, 3).unwrap();
    board.set_dices([6, 4]).unwrap();

    assert!(board.search_for_valid_moves().is_empty());
    assert!(!board.has_valid_moves_left());
    assert!(board.is_dices_left());
}

#[test]
fn test_bear_off_to_win() {
    let mut board = Board::empty();
    board.place(24, Color::White, 1).unwrap();
    board.place(26, Color::White, 14).unwrap();
    board.place(1, Color::Black, 15).unwrap();
    board.set_dices([3, 2]).unwrap();
    assert_eq!(board.check_win(), GameStatus::InProgress);

    // Either die bears the checker off; the larger one is forced.
    let moves = board.search_for_valid_moves();
    assert_eq!(
        moves,
        &[Move::bear_off(SlotId::new(24), SlotId::WHITE_BEAR_OFF, 3, 1)]
    );

    board.move_by_index(0).unwrap();
    assert_eq!(board.check_win(), GameStatus::WhiteWon);
    assert_eq!(board.count_white(), 0);
}

#[test]
fn test_board_serializes() {
    let mut board = Board::new_standard_game();
    board.set_dices([6, 1]).unwrap();
    board.search_for_valid_moves();

    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

// =============================================================================
// Untrusted Input Tests
// =============================================================================

#[test]
fn test_deserialized_move_with_bad_slot_is_rejected() {
    let json = r#"{"kind":"Normal","from":200,"to":5,"pips":4,"distance":4}"#;
    let err = serde_json::from_str::<Move>(json).unwrap_err();
    assert!(err.to_string().contains("slot index 200"));

    assert_eq!(
        SlotId::try_from(200u8),
        Err(EngineError::InvalidSlot { slot: 200 })
    );
}

#[test]
fn test_capture_undo_into_tray_is_rejected() {
    let mut board = Board::new_standard_game();
    board.place(26, Color::White, 1).unwrap();
    board.place(25, Color::Black, 1).unwrap();
    let before = board.clone();

    let json = r#"{"kind":{"Undo":{"capture":true}},"from":19,"to":26,"pips":6,"distance":6}"#;
    let mv: Move = serde_json::from_str(json).unwrap();

    assert!(matches!(
        board.apply(&mv),
        Err(EngineError::IllegalMove { .. })
    ));
    assert_eq!(board, before);
    assert_eq!(board.slot(26).unwrap().owner, Some(Color::White));
}

#[test]
fn test_move_from_tray_is_rejected() {
    let mut board = Board::empty();
    board.place(26, Color::White, 3).unwrap();
    board.place(19, Color::White, 12).unwrap();
    board.set_dices([2, 1]).unwrap();
    let before = board.clone();

    let from_tray = Move::normal(SlotId::WHITE_BEAR_OFF, SlotId::new(24), 2);
    assert!(matches!(
        board.apply(&from_tray),
        Err(EngineError::IllegalMove { .. })
    ));
    assert_eq!(board, before);
}
