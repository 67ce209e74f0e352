//! Move enumeration backed by the taken-cell cache.

use othello_board::{Board, Player, Position, SIZE};

use crate::cache::TakenCellCache;

/// Legal moves for `player`, skipping cells the cache marks as taken.
///
/// Cells are visited column by column (outer loop over columns, inner loop
/// over rows). The search keeps the first of several equally scored moves, so
/// this order decides ties.
pub fn legal_moves(board: &Board, cache: &TakenCellCache, player: Player) -> Vec<Position> {
    let mut moves = Vec::new();
    for column in 0..SIZE {
        for row in 0..SIZE {
            let pos = Position::new(row, column);
            if cache.contains(pos) {
                continue;
            }
            if board.is_legal_move(player, pos) {
                moves.push(pos);
            }
        }
    }
    moves
}
