use adversary::{
    Engine, Error, GameState, SearchConfig, Traversal, best_action,
    search::solve,
    tictactoe::{BoardState, Cell, Mark},
};

fn engines() -> Vec<Engine> {
    vec![
        Engine::default(),
        Engine::new(SearchConfig::new().with_traversal(Traversal::Iterative)).unwrap(),
    ]
}

#[test]
fn empty_board_opens_in_corner_or_center_and_draws() {
    let board = BoardState::new();
    for engine in engines() {
        let outcome = engine.search(&board).unwrap();
        let action = outcome.action.expect("empty board has moves");
        assert!(
            [0, 2, 4, 6, 8].contains(&action),
            "unexpected opening {action}"
        );
        assert_eq!(outcome.value, Some(0));
        assert!(outcome.complete);
    }
}

#[test]
fn takes_immediate_win() {
    // X X .
    // O O .
    // . . .
    let board = BoardState::from_string("XX.OO....").unwrap();
    for engine in engines() {
        let outcome = engine.search(&board).unwrap();
        assert_eq!(outcome.action, Some(2));
        assert_eq!(outcome.value, Some(1));
    }
}

#[test]
fn o_takes_immediate_win_over_block() {
    // X X .
    // O O .
    // X . .
    let board = BoardState::from_string("XX.OO.X..").unwrap();
    assert_eq!(board.to_move, Mark::O);
    let outcome = Engine::default().search(&board).unwrap();
    assert_eq!(outcome.action, Some(5));
    assert_eq!(outcome.value, Some(-1));
}

#[test]
fn blocks_opponent_threat() {
    // X X .
    // . O .
    // . . .
    let o_to_move = BoardState::from_string("XX..O....").unwrap();
    assert_eq!(best_action(&o_to_move).unwrap(), Some(2));

    // O O .
    // X . .
    // . . X
    let x_to_move = BoardState::from_string("OO.X....X").unwrap();
    assert_eq!(x_to_move.to_move, Mark::X);
    assert_eq!(best_action(&x_to_move).unwrap(), Some(2));
}

#[test]
fn full_drawn_board_returns_no_action() {
    // X O X
    // X O O
    // O X X
    let board = BoardState::from_string("XOXXOOOXX").unwrap();
    for engine in engines() {
        let outcome = engine.search(&board).unwrap();
        assert_eq!(outcome.action, None);
        assert_eq!(outcome.value, Some(0));
        assert_eq!(outcome.stats.nodes, 1);
        assert_eq!(outcome.stats.expansions, 0);
        assert_eq!(outcome.stats.max_depth, 0);
    }
}

#[test]
fn won_board_returns_no_action() {
    let board = BoardState::from_string("XXXOO....").unwrap();
    assert_eq!(best_action(&board).unwrap(), None);
    assert_eq!(Engine::default().search(&board).unwrap().value, Some(1));
}

#[test]
fn repeated_searches_are_identical() {
    let boards = ["", "X........", "X...O....", "XO..X...."];
    for s in boards {
        let board = if s.is_empty() {
            BoardState::new()
        } else {
            BoardState::from_string(s).unwrap()
        };
        let engine = Engine::default();
        let first = engine.search(&board).unwrap();
        let second = engine.search(&board).unwrap();
        assert_eq!(first, second, "search of '{s}' is not deterministic");
    }
}

#[test]
fn engine_matches_exhaustive_solution_on_openings() {
    let engine = Engine::default();
    let empty = BoardState::new();
    for pos in empty.legal_moves() {
        let board = empty.make_move(pos).unwrap();
        let expected = solve(&board).unwrap();
        let outcome = engine.search(&board).unwrap();
        assert_eq!(outcome.value, Some(expected.value), "after X at {pos}");
        assert_eq!(outcome.action, expected.action, "after X at {pos}");
    }
}

#[test]
fn invalid_action_is_rejected_and_state_unchanged() {
    let board = BoardState::from_string("X...O....").unwrap();
    let before = board;

    assert!(matches!(board.apply(&4), Err(Error::InvalidAction { .. })));
    assert!(matches!(board.apply(&9), Err(Error::InvalidAction { .. })));
    assert_eq!(board, before);
    assert_eq!(board.get(4), Cell::O);
}

#[test]
fn malformed_state_aborts_search() {
    let mut board = BoardState::new();
    board.cells[0] = Cell::X;
    board.cells[1] = Cell::X;

    let err = Engine::default().search(&board).unwrap_err();
    assert!(matches!(err, Error::MalformedState { .. }), "got {err}");
}

#[test]
fn o_first_boards_are_scored_for_x() {
    // O opened in the centre and X answered in a corner; O to move
    let board = BoardState::from_string("X...O...._O").unwrap();
    let outcome = Engine::default().search(&board).unwrap();
    assert_eq!(outcome.value, Some(0));
    assert_eq!(outcome.action, solve(&board).unwrap().action);
}
