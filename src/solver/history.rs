//! Move-history chains and playback reconstruction

use std::rc::Rc;

use crate::board::{Board, Jump};

/// One link in a search branch's move record.
///
/// A node records the jump that produced it, the resulting board snapshot,
/// and a link to the node it extended. Chains share their tails: many
/// branches extend the same prefix, so each node holds a reference-counted
/// link to its predecessor rather than a copy of the chain. A node with no
/// predecessor records the first jump made from the start position.
#[derive(Debug, Clone)]
pub struct HistoryNode {
    pub jump: Jump,
    pub board: Board,
    pub prev: Option<Rc<HistoryNode>>,
}

/// A shared handle to the newest node of a move-history chain.
pub type MoveHistory = Rc<HistoryNode>;

impl HistoryNode {
    /// Start a new chain with the first jump from the start position.
    pub fn start(jump: Jump, board: Board) -> MoveHistory {
        Rc::new(HistoryNode {
            jump,
            board,
            prev: None,
        })
    }

    /// Extend a chain with one more jump, sharing the existing tail.
    pub fn extend(prev: &MoveHistory, jump: Jump, board: Board) -> MoveHistory {
        Rc::new(HistoryNode {
            jump,
            board,
            prev: Some(Rc::clone(prev)),
        })
    }

    /// Number of jumps recorded along this chain.
    pub fn chain_len(&self) -> usize {
        let mut len = 0;
        let mut current = Some(self);
        while let Some(node) = current {
            len += 1;
            current = node.prev.as_deref();
        }
        len
    }
}

/// Collect the board snapshots along a chain, oldest first.
///
/// Walks the predecessor links from the given node back to the first jump
/// (inclusive) and reverses the result, producing one board per recorded
/// jump, oldest first and fully materialized.
pub fn history_to_boards(tail: &MoveHistory) -> Vec<Board> {
    let mut boards = Vec::new();
    let mut current = Some(tail.as_ref());
    while let Some(node) = current {
        boards.push(node.board);
        current = node.prev.as_deref();
    }
    boards.reverse();
    boards
}

/// Collect the jumps along a chain, oldest first.
pub fn history_to_jumps(tail: &MoveHistory) -> Vec<Jump> {
    let mut jumps = Vec::new();
    let mut current = Some(tail.as_ref());
    while let Some(node) = current {
        jumps.push(node.jump);
        current = node.prev.as_deref();
    }
    jumps.reverse();
    jumps
}
