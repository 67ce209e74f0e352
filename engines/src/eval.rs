//! Leaf evaluation.
//!
//! Scores are always taken from the searching player's side, whichever side
//! is to move at the leaf.

use othello_board::{Board, Player, Position, SIZE};

/// Heuristic score of a position for `me`
pub trait Evaluator {
    fn score(&self, board: &Board, me: Player) -> i32;
}

/// Corner, edge and mobility heuristic.
///
/// Corner and edge terms count the cells that exist on the board, not the
/// cells `me` owns, so on an 8x8 board they are constant (4 and 28) and only
/// mobility varies between positions. The formula is:
///
/// ```text
/// average = (corners + edges + mobility) / 3      // integer division
/// score   = average * corners * 4 * edges
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCornerMobility;

impl Evaluator for EdgeCornerMobility {
    fn score(&self, board: &Board, me: Player) -> i32 {
        let last = SIZE - 1;
        let mut corners = 0;
        let mut edges = 0;
        let mut mobility = 0;

        for column in 0..SIZE {
            for row in 0..SIZE {
                let on_row_edge = row == 0 || row == last;
                let on_col_edge = column == 0 || column == last;
                if on_row_edge && on_col_edge {
                    corners += 1;
                }
                if on_row_edge || on_col_edge {
                    edges += 1;
                }
                if board.is_legal_move(me, Position::new(row, column)) {
                    mobility += 1;
                }
            }
        }

        let average = (corners + edges + mobility) / 3;
        average * corners * 4 * edges
    }
}
