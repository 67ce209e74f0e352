//! Board simulation for hypothetical moves.

use othello_board::{Board, Cell, GameError, Player, Position, CELL_COUNT};

/// Copy `board` and play `mover` at `pos` on the copy.
///
/// Only cells holding `me` or its opponent are carried over. The source board
/// is never touched; each explored branch owns its copy.
pub fn copy_with_move(
    board: &Board,
    me: Player,
    mover: Player,
    pos: Position,
) -> Result<Board, GameError> {
    let mine = me.to_cell();
    let theirs = me.opponent().to_cell();

    let mut copy = Board::empty();
    for index in 0..CELL_COUNT {
        let square = Position::from_index(index);
        match board.status(square) {
            Cell::Empty => {}
            cell if cell == mine => copy.set_square(me, square),
            cell if cell == theirs => copy.set_square(me.opponent(), square),
            _ => {}
        }
    }

    copy.make_move(mover, pos)?;
    Ok(copy)
}
