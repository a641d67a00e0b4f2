//! Depth-first alpha-beta on the native call stack

use super::{Eval, Node, open, tighten};
use crate::{
    Result,
    game::{GameState, Value},
    search::stats::Tracker,
};

/// Evaluate `state` inside the window `(alpha, beta)`.
///
/// Children are searched in `legal_actions` order. A child replaces the
/// running best only when strictly better, so the first action reaching the
/// best value is the one reported. Remaining children are skipped as soon as
/// `beta <= alpha`.
pub(crate) fn search<S: GameState>(
    tracker: &mut Tracker<'_>,
    state: &S,
    mut alpha: Value<S::Utility>,
    mut beta: Value<S::Utility>,
    depth: usize,
) -> Result<Eval<S::Action, S::Utility>> {
    let (player, actions) = match open(tracker, state, depth)? {
        Node::Halted => return Ok(Eval::halted()),
        Node::Leaf(utility) => return Ok(Eval::leaf(utility)),
        Node::Inner { player, actions } => (player, actions),
    };

    let total = actions.len();
    let mut value = Value::worst_for(player);
    let mut best = None;

    for (index, action) in actions.into_iter().enumerate() {
        let child = state.apply(&action)?;
        let eval = search(tracker, &child, alpha, beta, depth + 1)?;
        if !eval.complete {
            return Ok(Eval::partial(value, best));
        }

        if value.improved_by(eval.value, player) {
            value = eval.value;
            best = Some(action);
        }

        if tighten(player, value, &mut alpha, &mut beta) {
            let skipped = total - index - 1;
            if skipped > 0 {
                tracker.cutoff(depth, skipped)?;
            }
            break;
        }
    }

    Ok(Eval::exact(value, best))
}
