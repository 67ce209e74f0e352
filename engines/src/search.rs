//! Minimax Search with Alpha-Beta Pruning
//!
//! Depth-limited minimax over hypothetical boards produced by
//! [`copy_with_move`]. The searching player (`Role::Me`) maximises the
//! evaluator's score and the opponent minimises it; leaves are always scored
//! from the searching player's side.
//!
//! Node handling:
//! - depth 0 is a leaf, whoever is to move
//! - a side with no legal move on a full board is a leaf
//! - a side with no legal move on a non-full board passes: the other side
//!   moves from the same board at the same depth and window, and if it cannot
//!   move either the game is over and the node is a leaf; a node that passed
//!   reports the other side's value but no best move
//! - otherwise every candidate is explored in enumeration order; the first
//!   move that strictly improves the running best is kept, so later equal
//!   scores never replace it
//!
//! The taken-cell cache is marked for the duration of each child search and
//! unmarked on every way out of it, including cut-offs.

use log::warn;
use othello_board::{Board, Player, Position};

use crate::cache::TakenCellCache;
use crate::eval::Evaluator;
use crate::movegen::legal_moves;
use crate::simulate::copy_with_move;

/// Which side a node belongs to, relative to the searching player
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Me,
    Opponent,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::Me => Role::Opponent,
            Role::Opponent => Role::Me,
        }
    }

    /// The colour this role plays when the searching player is `me`
    pub fn player(self, me: Player) -> Player {
        match self {
            Role::Me => me,
            Role::Opponent => me.opponent(),
        }
    }
}

/// Best move for the side to move at a node and the node's minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// None at leaves
    pub best_move: Option<Position>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Nodes scored by the evaluator
    pub leaves: u64,
    /// Candidate loops stopped early by a cut-off
    pub cutoffs: u64,
    /// Forced passes taken
    pub passes: u64,
}

pub struct Searcher<'a, E: Evaluator> {
    me: Player,
    evaluator: &'a E,
    pruning: bool,
    stats: SearchStats,
}

impl<'a, E: Evaluator> Searcher<'a, E> {
    pub fn new(me: Player, evaluator: &'a E) -> Self {
        Self {
            me,
            evaluator,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Disable cut-offs to get plain minimax over the full tree
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` to `depth` plies.
    ///
    /// `cache` must hold every occupied cell of `board`; it is returned in the
    /// same state it was passed in.
    pub fn search(
        &mut self,
        cache: &mut TakenCellCache,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        role: Role,
    ) -> SearchResult {
        self.alpha_beta(cache, board, depth, alpha, beta, role)
    }

    fn alpha_beta(
        &mut self,
        cache: &mut TakenCellCache,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        mut role: Role,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(board);
        }

        let mut passed = false;
        let mut moves = legal_moves(board, cache, role.player(self.me));
        if moves.is_empty() {
            if cache.is_full() {
                return self.leaf(board);
            }
            self.stats.passes += 1;
            passed = true;
            role = role.other();
            moves = legal_moves(board, cache, role.player(self.me));
            if moves.is_empty() {
                return self.leaf(board);
            }
        }

        let mover = role.player(self.me);
        let mut best = SearchResult {
            best_move: None,
            score: match role {
                Role::Me => i32::MIN,
                Role::Opponent => i32::MAX,
            },
        };

        for pos in moves {
            let next = match copy_with_move(board, self.me, mover, pos) {
                Ok(next) => next,
                Err(err) => {
                    warn!("skipping candidate {} for {:?}: {}", pos, mover, err);
                    continue;
                }
            };

            let score = {
                let mut marked = cache.mark(pos);
                self.alpha_beta(&mut marked, &next, depth - 1, alpha, beta, role.other())
                    .score
            };

            match role {
                Role::Me => {
                    if score > best.score {
                        best = SearchResult {
                            best_move: Some(pos),
                            score,
                        };
                    }
                    if self.pruning {
                        if best.score >= beta {
                            self.stats.cutoffs += 1;
                            break;
                        }
                        alpha = alpha.max(best.score);
                    }
                }
                Role::Opponent => {
                    if score < best.score {
                        best = SearchResult {
                            best_move: Some(pos),
                            score,
                        };
                    }
                    if self.pruning {
                        if best.score <= alpha {
                            self.stats.cutoffs += 1;
                            break;
                        }
                        beta = beta.min(best.score);
                    }
                }
            }
        }

        // The move belongs to the other side; the side asked about has none
        if passed {
            best.best_move = None;
        }
        best
    }

    fn leaf(&mut self, board: &Board) -> SearchResult {
        self.stats.leaves += 1;
        SearchResult::leaf(self.evaluator.score(board, self.me))
    }
}
