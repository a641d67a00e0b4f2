//! Alpha-beta over an explicit stack of frames
//!
//! Same visiting order, pruning and tie-breaking as the recursive traversal,
//! but every open node lives in a heap-allocated `Vec<Frame>` so the search
//! depth is bounded by memory rather than by the thread's call stack.

use super::{Eval, Node, open, tighten};
use crate::{
    Result,
    game::{GameState, Player, Value},
    search::stats::Tracker,
};

/// One open node of the search
struct Frame<S: GameState> {
    state: S,
    player: Player,
    actions: Vec<S::Action>,
    // Index of the next action to try
    next: usize,
    alpha: Value<S::Utility>,
    beta: Value<S::Utility>,
    value: Value<S::Utility>,
    best: Option<S::Action>,
    depth: usize,
}

impl<S: GameState> Frame<S> {
    fn new(
        state: S,
        player: Player,
        actions: Vec<S::Action>,
        alpha: Value<S::Utility>,
        beta: Value<S::Utility>,
        depth: usize,
    ) -> Self {
        Self {
            state,
            player,
            actions,
            next: 0,
            alpha,
            beta,
            value: Value::worst_for(player),
            best: None,
            depth,
        }
    }

    /// Fold in the value of the child reached by the most recently tried action.
    fn absorb(&mut self, tracker: &mut Tracker<'_>, child: Value<S::Utility>) -> Result<()> {
        if self.value.improved_by(child, self.player) {
            self.value = child;
            self.best = Some(self.actions[self.next - 1].clone());
        }

        if tighten(self.player, self.value, &mut self.alpha, &mut self.beta) {
            let skipped = self.actions.len() - self.next;
            if skipped > 0 {
                tracker.cutoff(self.depth, skipped)?;
            }
            self.next = self.actions.len();
        }
        Ok(())
    }
}

pub(crate) fn search<S: GameState>(
    tracker: &mut Tracker<'_>,
    root: &S,
    alpha: Value<S::Utility>,
    beta: Value<S::Utility>,
) -> Result<Eval<S::Action, S::Utility>> {
    let mut stack: Vec<Frame<S>> = match open(tracker, root, 0)? {
        Node::Halted => return Ok(Eval::halted()),
        Node::Leaf(utility) => return Ok(Eval::leaf(utility)),
        Node::Inner { player, actions } => {
            vec![Frame::new(root.clone(), player, actions, alpha, beta, 0)]
        }
    };

    // The stack is never empty at the top of the loop: the root frame is
    // only popped on the return path.
    loop {
        let top = stack.len() - 1;
        let frame = &mut stack[top];

        if frame.next < frame.actions.len() {
            let child = frame.state.apply(&frame.actions[frame.next])?;
            frame.next += 1;
            let (alpha, beta, depth) = (frame.alpha, frame.beta, frame.depth + 1);

            match open(tracker, &child, depth)? {
                Node::Halted => {
                    let root = stack.swap_remove(0);
                    return Ok(Eval::partial(root.value, root.best));
                }
                Node::Leaf(utility) => frame.absorb(tracker, Value::Finite(utility))?,
                Node::Inner { player, actions } => {
                    stack.push(Frame::new(child, player, actions, alpha, beta, depth));
                }
            }
            continue;
        }

        let done = stack.swap_remove(top);
        match stack.last_mut() {
            Some(parent) => parent.absorb(tracker, done.value)?,
            None => return Ok(Eval::exact(done.value, done.best)),
        }
    }
}
