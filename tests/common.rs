//! Common test utilities for the adversary test suite.
//!
//! Provides a game played on an explicit, randomly generated tree so the
//! engine can be checked on shapes Tic-Tac-Toe never produces: uneven
//! branching, leaves at every depth and many tied values.

#![allow(dead_code)]

use std::{fmt, rc::Rc};

use adversary::{Error, GameState, Player, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Debug)]
enum TreeNode {
    Leaf(i32),
    Inner(Vec<usize>),
}

/// A position in a shared explicit game tree. Actions are child indices.
#[derive(Clone)]
pub struct TreeGame {
    nodes: Rc<Vec<TreeNode>>,
    node: usize,
    to_move: Player,
}

impl fmt::Debug for TreeGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeGame(node {}, {} to move)", self.node, self.to_move)
    }
}

impl TreeGame {
    /// Generate a random tree at most `depth` plies deep with 1 to
    /// `max_branching` children per inner node and leaf values in -3..=3.
    pub fn random(seed: u64, depth: usize, max_branching: usize, to_move: Player) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut nodes = Vec::new();
        build(&mut rng, &mut nodes, depth, max_branching, true);
        Self {
            nodes: Rc::new(nodes),
            node: 0,
            to_move,
        }
    }

    /// Number of positions in the whole tree
    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}

// Pushes the subtree rooted at a new node and returns that node's index
fn build(
    rng: &mut StdRng,
    nodes: &mut Vec<TreeNode>,
    depth: usize,
    max_branching: usize,
    is_root: bool,
) -> usize {
    let index = nodes.len();
    let leaf = depth == 0 || (!is_root && rng.random_bool(0.2));
    if leaf {
        nodes.push(TreeNode::Leaf(rng.random_range(-3..=3)));
        return index;
    }

    nodes.push(TreeNode::Inner(Vec::new()));
    let width = rng.random_range(1..=max_branching);
    let children: Vec<usize> = (0..width)
        .map(|_| build(rng, nodes, depth - 1, max_branching, false))
        .collect();
    nodes[index] = TreeNode::Inner(children);
    index
}

impl GameState for TreeGame {
    type Action = usize;
    type Utility = i32;

    fn current_player(&self) -> Result<Player> {
        Ok(self.to_move)
    }

    fn legal_actions(&self) -> Vec<usize> {
        match &self.nodes[self.node] {
            TreeNode::Leaf(_) => Vec::new(),
            TreeNode::Inner(children) => (0..children.len()).collect(),
        }
    }

    fn apply(&self, action: &usize) -> Result<Self> {
        match &self.nodes[self.node] {
            TreeNode::Inner(children) if *action < children.len() => Ok(Self {
                nodes: Rc::clone(&self.nodes),
                node: children[*action],
                to_move: self.to_move.opponent(),
            }),
            _ => Err(Error::InvalidAction {
                action: action.to_string(),
                state: format!("{self:?}"),
            }),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self.nodes[self.node], TreeNode::Leaf(_))
    }

    fn utility(&self) -> Result<i32> {
        match self.nodes[self.node] {
            TreeNode::Leaf(value) => Ok(value),
            TreeNode::Inner(_) => Err(Error::UndefinedUtility {
                state: format!("{self:?}"),
            }),
        }
    }
}
