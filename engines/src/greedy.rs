//! Greedy Baseline Agent
//!
//! Plays the legal move that flips the most discs right now, with no
//! lookahead. Ties go to the first move in row-major order. Used as a
//! sparring partner for the minimax agent.

use othello_board::{Board, Player, Position};

use crate::agent::Agent;
use crate::simulate::copy_with_move;

#[derive(Debug, Clone, Copy)]
pub struct GreedyAgent {
    color: Player,
}

impl GreedyAgent {
    pub fn new(color: Player) -> Self {
        Self { color }
    }

    /// Number of discs `self` would flip by playing at `pos`
    fn captures(&self, board: &Board, pos: Position) -> u8 {
        let (black, white) = board.piece_counts();
        match copy_with_move(board, self.color, self.color, pos) {
            Ok(next) => {
                let (black_after, white_after) = next.piece_counts();
                match self.color {
                    Player::Black => white - white_after,
                    Player::White => black - black_after,
                }
            }
            Err(_) => 0,
        }
    }
}

impl Agent for GreedyAgent {
    fn color(&self) -> Player {
        self.color
    }

    fn next_move(&mut self, board: &Board) -> Option<Position> {
        let mut best: Option<(Position, u8)> = None;
        for pos in board.legal_moves(self.color) {
            let captures = self.captures(board, pos);
            if best.map_or(true, |(_, most)| captures > most) {
                best = Some((pos, captures));
            }
        }
        best.map(|(pos, _)| pos)
    }
}
