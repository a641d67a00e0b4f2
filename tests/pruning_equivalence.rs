mod common;

use adversary::{
    Engine, GameState, Player, SearchConfig, Traversal,
    adapters::TraceObserver,
    search::{minimax_value, solve},
    tictactoe::{BoardState, reachable_states},
};
use common::TreeGame;

fn iterative() -> Engine {
    Engine::new(SearchConfig::new().with_traversal(Traversal::Iterative)).unwrap()
}

#[test]
fn every_reachable_board_matches_exhaustive_minimax() {
    let recursive = Engine::default();
    let iterative = iterative();
    let states = reachable_states(BoardState::new()).unwrap();
    assert_eq!(states.len(), 5478);

    for state in &states {
        let expected = solve(state).unwrap();
        let rec = recursive.search(state).unwrap();
        let iter = iterative.search(state).unwrap();

        assert_eq!(rec.value, Some(expected.value), "value of {}", state.encode());
        assert_eq!(rec.action, expected.action, "action of {}", state.encode());
        assert_eq!(rec, iter, "traversals disagree on {}", state.encode());
    }
}

#[test]
fn random_trees_match_exhaustive_minimax() {
    let recursive = Engine::default();
    let iterative = iterative();

    for seed in 0..200 {
        for root_player in [Player::Max, Player::Min] {
            let game = TreeGame::random(seed, 6, 4, root_player);
            let expected = solve(&game).unwrap();
            let rec = recursive.search(&game).unwrap();
            let iter = iterative.search(&game).unwrap();

            assert_eq!(rec.value, Some(expected.value), "seed {seed} {root_player}");
            assert_eq!(rec.action, expected.action, "seed {seed} {root_player}");
            assert_eq!(rec, iter, "seed {seed} {root_player}");
            assert!(rec.stats.nodes as usize <= game.size());
        }
    }
}

#[test]
fn chosen_action_achieves_root_value() {
    for seed in 0..50 {
        let game = TreeGame::random(seed, 5, 5, Player::Max);
        let outcome = Engine::default().search(&game).unwrap();
        let Some(action) = outcome.action else {
            continue;
        };
        let child = game.apply(&action).unwrap();
        assert_eq!(Some(minimax_value(&child).unwrap()), outcome.value);
    }
}

#[test]
fn pruning_skips_work_on_the_empty_board() {
    let outcome = Engine::default().search(&BoardState::new()).unwrap();
    // The full tree has 549,946 nodes
    assert!(outcome.stats.nodes < 549_946);
    assert!(outcome.stats.cutoffs > 0);
    assert_eq!(outcome.stats.max_depth, 9);
}

#[test]
fn traversals_emit_the_same_trace() {
    let board = BoardState::from_string("X...O....").unwrap();

    let mut rec_trace = TraceObserver::new(Vec::new(), usize::MAX);
    Engine::default()
        .search_observed(&board, &mut rec_trace)
        .unwrap();
    let mut iter_trace = TraceObserver::new(Vec::new(), usize::MAX);
    iterative().search_observed(&board, &mut iter_trace).unwrap();

    let rec_log = String::from_utf8(rec_trace.into_inner()).unwrap();
    let iter_log = String::from_utf8(iter_trace.into_inner()).unwrap();
    // Only the start line names the traversal
    assert_eq!(
        rec_log.lines().skip(1).collect::<Vec<_>>(),
        iter_log.lines().skip(1).collect::<Vec<_>>()
    );
}
