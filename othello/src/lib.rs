/// Board representation and capture rules for Othello (Reversi)
use std::fmt;

use thiserror::Error;

/// Board side length
pub const SIZE: usize = 8;

/// Number of cells on the board
pub const CELL_COUNT: usize = SIZE * SIZE;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move at ({row}, {col})")]
    InvalidMove { row: usize, col: usize },
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("invalid cell value {value} at index {index}")]
    InvalidCell { index: usize, value: u8 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Decode the flat-array encoding (1 = Black, 2 = White)
    pub fn from_u8(value: u8) -> Option<Player> {
        match value {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

/// A board coordinate.
///
/// Bounds are not checked at construction; board methods reject
/// out-of-range positions instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Inverse of [`Position::index`]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Flat index: row * 8 + col
    pub const fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    pub const fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Cell; SIZE]; SIZE],
    black_count: u8,
    white_count: u8,
}

impl Board {
    /// Create a new board with initial Othello setup
    /// Initial setup has 4 pieces in the center:
    /// - (3,3) and (4,4) are White
    /// - (3,4) and (4,3) are Black
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board.update_piece_counts();
        board
    }

    /// Create a board with no pieces on it
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
            black_count: 0,
            white_count: 0,
        }
    }

    /// Build a board from a flat array [0=empty, 1=black, 2=white]
    /// indexed as row * 8 + col
    pub fn from_state(state: &[u8; CELL_COUNT]) -> Result<Self, GameError> {
        let mut board = Self::empty();
        for (index, &value) in state.iter().enumerate() {
            let pos = Position::from_index(index);
            match value {
                0 => {}
                _ => match Player::from_u8(value) {
                    Some(player) => board.cells[pos.row][pos.col] = player.to_cell(),
                    None => return Err(GameError::InvalidCell { index, value }),
                },
            }
        }
        board.update_piece_counts();
        Ok(board)
    }

    /// Get the contents of a cell
    pub fn status(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Paint a cell with the player's colour without applying any captures
    pub fn set_square(&mut self, player: Player, pos: Position) {
        let previous = self.cells[pos.row][pos.col];
        self.cells[pos.row][pos.col] = player.to_cell();
        match previous {
            Cell::Black => self.black_count -= 1,
            Cell::White => self.white_count -= 1,
            Cell::Empty => {}
        }
        match player {
            Player::Black => self.black_count += 1,
            Player::White => self.white_count += 1,
        }
    }

    /// Check if `player` may move at `pos`
    /// A move is legal if:
    /// 1. The cell is on the board and empty
    /// 2. Placing a piece there would flip at least one opponent piece
    pub fn is_legal_move(&self, player: Player, pos: Position) -> bool {
        if !pos.in_bounds() {
            return false;
        }

        if self.cells[pos.row][pos.col] != Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.would_flip_in_direction(player, pos, dr, dc))
    }

    /// Check if placing a piece at `pos` would flip pieces in direction (dr, dc)
    /// Returns true if there's at least one opponent piece followed by a player piece
    fn would_flip_in_direction(&self, player: Player, pos: Position, dr: i8, dc: i8) -> bool {
        let own = player.to_cell();
        let opponent = player.opponent().to_cell();

        let mut r = pos.row as i8 + dr;
        let mut c = pos.col as i8 + dc;
        let mut found_opponent = false;

        while r >= 0 && r < SIZE as i8 && c >= 0 && c < SIZE as i8 {
            match self.cells[r as usize][c as usize] {
                Cell::Empty => return false,
                cell if cell == opponent => {
                    found_opponent = true;
                    r += dr;
                    c += dc;
                }
                cell if cell == own => return found_opponent,
                _ => return false,
            }
        }

        false
    }

    /// All legal moves for `player` in row-major order
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        (0..CELL_COUNT)
            .map(Position::from_index)
            .filter(|&pos| self.is_legal_move(player, pos))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..CELL_COUNT)
            .map(Position::from_index)
            .any(|pos| self.is_legal_move(player, pos))
    }

    /// Apply a move for `player` at `pos`, flipping captured pieces
    /// Returns Ok(pieces_flipped) or an error when the move is not legal
    pub fn make_move(&mut self, player: Player, pos: Position) -> Result<u8, GameError> {
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds { row: pos.row, col: pos.col });
        }
        if !self.is_legal_move(player, pos) {
            return Err(GameError::InvalidMove { row: pos.row, col: pos.col });
        }

        // Directions must be decided before the piece is placed and flips begin
        let capturing: Vec<(i8, i8)> = DIRECTIONS
            .iter()
            .copied()
            .filter(|&(dr, dc)| self.would_flip_in_direction(player, pos, dr, dc))
            .collect();

        self.cells[pos.row][pos.col] = player.to_cell();

        let mut total_flipped = 0;
        for (dr, dc) in capturing {
            total_flipped += self.flip_in_direction(player, pos, dr, dc);
        }

        self.update_piece_counts();

        Ok(total_flipped)
    }

    /// Flip opponent pieces in a specific direction from `pos`
    /// Returns the number of pieces flipped
    fn flip_in_direction(&mut self, player: Player, pos: Position, dr: i8, dc: i8) -> u8 {
        let own = player.to_cell();
        let opponent = player.opponent().to_cell();
        let mut flipped = 0;

        let mut r = pos.row as i8 + dr;
        let mut c = pos.col as i8 + dc;

        while r >= 0 && r < SIZE as i8 && c >= 0 && c < SIZE as i8 {
            let cell = &mut self.cells[r as usize][c as usize];
            if *cell != opponent {
                break;
            }
            *cell = own;
            flipped += 1;
            r += dr;
            c += dc;
        }

        flipped
    }

    /// Update piece counts by scanning the board
    fn update_piece_counts(&mut self) {
        let mut black = 0;
        let mut white = 0;

        for row in self.cells.iter() {
            for cell in row {
                match cell {
                    Cell::Black => black += 1,
                    Cell::White => white += 1,
                    Cell::Empty => {}
                }
            }
        }

        self.black_count = black;
        self.white_count = white;
    }

    /// Get piece counts (black_count, white_count)
    pub fn piece_counts(&self) -> (u8, u8) {
        (self.black_count, self.white_count)
    }

    /// Check if the board is full (no empty cells)
    pub fn is_full(&self) -> bool {
        usize::from(self.black_count + self.white_count) == CELL_COUNT
    }

    /// Game is over when the board is full or neither player can move
    pub fn is_game_over(&self) -> bool {
        self.is_full()
            || (!self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White))
    }

    /// Returns Some(Player) if there's a winner, None if it's a draw or game is not over
    pub fn winner(&self) -> Option<Player> {
        if !self.is_game_over() {
            return None;
        }

        if self.black_count > self.white_count {
            Some(Player::Black)
        } else if self.white_count > self.black_count {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Get current board state as flat array [0=empty, 1=black, 2=white]
    /// Array is indexed as: index = row * 8 + col
    pub fn state(&self) -> [u8; CELL_COUNT] {
        let mut state = [0u8; CELL_COUNT];
        for (index, slot) in state.iter_mut().enumerate() {
            *slot = self.status(Position::from_index(index)).to_u8();
        }
        state
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new_initial_setup() {
        let board = Board::new();

        assert_eq!(board.cells[3][3], Cell::White);
        assert_eq!(board.cells[3][4], Cell::Black);
        assert_eq!(board.cells[4][3], Cell::Black);
        assert_eq!(board.cells[4][4], Cell::White);

        for i in 0..SIZE {
            for j in 0..SIZE {
                if (i, j) != (3, 3) && (i, j) != (3, 4) && (i, j) != (4, 3) && (i, j) != (4, 4) {
                    assert_eq!(board.cells[i][j], Cell::Empty);
                }
            }
        }

        assert_eq!(board.piece_counts(), (2, 2));
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_to_cell() {
        assert_eq!(Player::Black.to_cell(), Cell::Black);
        assert_eq!(Player::White.to_cell(), Cell::White);
    }

    #[test]
    fn test_position_equality_and_index() {
        assert_eq!(Position::new(2, 5), Position::new(2, 5));
        assert_ne!(Position::new(2, 5), Position::new(5, 2));
        assert_eq!(Position::new(2, 5).index(), 21);
        assert_eq!(Position::from_index(21), Position::new(2, 5));
        assert!(!Position::new(8, 0).in_bounds());
    }

    #[test]
    fn test_is_legal_move_initial_board() {
        let board = Board::new();

        // Legal moves for Black at start: (2,3), (3,2), (4,5), (5,4)
        assert!(board.is_legal_move(Player::Black, Position::new(2, 3)));
        assert!(board.is_legal_move(Player::Black, Position::new(3, 2)));
        assert!(board.is_legal_move(Player::Black, Position::new(4, 5)));
        assert!(board.is_legal_move(Player::Black, Position::new(5, 4)));

        // Occupied cells
        assert!(!board.is_legal_move(Player::Black, Position::new(3, 3)));
        assert!(!board.is_legal_move(Player::Black, Position::new(3, 4)));

        // Empty but no flips
        assert!(!board.is_legal_move(Player::Black, Position::new(0, 0)));
        assert!(!board.is_legal_move(Player::Black, Position::new(7, 7)));
    }

    #[test]
    fn test_legal_moves_for_both_players() {
        let board = Board::new();
        assert_eq!(
            board.legal_moves(Player::Black),
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4)
            ]
        );
        assert_eq!(
            board.legal_moves(Player::White),
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_is_legal_move_out_of_bounds() {
        let board = Board::new();
        assert!(!board.is_legal_move(Player::Black, Position::new(8, 0)));
        assert!(!board.is_legal_move(Player::Black, Position::new(0, 8)));
        assert!(!board.is_legal_move(Player::Black, Position::new(10, 10)));
    }

    #[test]
    fn test_make_move_valid() {
        let mut board = Board::new();

        let result = board.make_move(Player::Black, Position::new(2, 3));
        assert_eq!(result, Ok(1));

        assert_eq!(board.cells[2][3], Cell::Black);
        assert_eq!(board.cells[3][3], Cell::Black);
        assert_eq!(board.piece_counts(), (4, 1));
    }

    #[test]
    fn test_make_move_invalid() {
        let mut board = Board::new();

        let result = board.make_move(Player::Black, Position::new(0, 0));
        assert_eq!(result, Err(GameError::InvalidMove { row: 0, col: 0 }));
        assert_eq!(board, Board::new());

        let result = board.make_move(Player::Black, Position::new(9, 1));
        assert_eq!(result, Err(GameError::OutOfBounds { row: 9, col: 1 }));
    }

    #[test]
    fn test_make_move_flips_along_capturing_lines() {
        let mut board = Board::empty();
        // White discs at (3,3) and (3,4), (4,3); Black anchors beyond them
        board.set_square(Player::White, Position::new(3, 3));
        board.set_square(Player::White, Position::new(3, 4));
        board.set_square(Player::White, Position::new(4, 3));
        board.set_square(Player::Black, Position::new(3, 5));
        board.set_square(Player::Black, Position::new(5, 3));
        board.set_square(Player::Black, Position::new(5, 5));

        // (3,2) captures along the row only
        let mut row_only = Board::from_state(&board.state()).unwrap();
        assert_eq!(row_only.make_move(Player::Black, Position::new(3, 2)), Ok(2));

        // (2,3) captures down the column
        let flipped = board.make_move(Player::Black, Position::new(2, 3)).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(board.status(Position::new(3, 3)), Cell::Black);
        assert_eq!(board.status(Position::new(4, 3)), Cell::Black);
        assert_eq!(board.status(Position::new(3, 4)), Cell::White);
    }

    #[test]
    fn test_set_square_tracks_counts() {
        let mut board = Board::empty();
        board.set_square(Player::Black, Position::new(0, 0));
        board.set_square(Player::White, Position::new(0, 1));
        assert_eq!(board.piece_counts(), (1, 1));

        board.set_square(Player::White, Position::new(0, 0));
        assert_eq!(board.piece_counts(), (0, 2));
    }

    #[test]
    fn test_from_state_round_trip() {
        let mut board = Board::new();
        board.make_move(Player::Black, Position::new(2, 3)).unwrap();
        let state = board.state();

        assert_eq!(state[2 * 8 + 3], 1);
        assert_eq!(state[3 * 8 + 3], 1);
        assert_eq!(state[4 * 8 + 4], 2);
        assert_eq!(Board::from_state(&state).unwrap(), board);
    }

    #[test]
    fn test_from_state_rejects_bad_cell() {
        let mut state = [0u8; CELL_COUNT];
        state[10] = 7;
        assert_eq!(
            Board::from_state(&state),
            Err(GameError::InvalidCell { index: 10, value: 7 })
        );
    }

    #[test]
    fn test_winner_game_not_over() {
        let board = Board::new();
        assert!(!board.is_game_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_winner_full_board() {
        let mut board = Board::empty();
        for index in 0..CELL_COUNT {
            let player = if index < 40 { Player::Black } else { Player::White };
            board.set_square(player, Position::from_index(index));
        }

        assert!(board.is_full());
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn test_winner_draw() {
        let mut board = Board::empty();
        for index in 0..CELL_COUNT {
            let player = if index % 2 == 0 { Player::Black } else { Player::White };
            board.set_square(player, Position::from_index(index));
        }

        assert!(board.is_game_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_game_over_when_no_moves() {
        let mut board = Board::empty();
        board.set_square(Player::Black, Position::new(0, 0));
        board.set_square(Player::White, Position::new(7, 7));

        assert!(!board.is_full());
        assert!(board.is_game_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_display_renders_grid() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), SIZE + 1);
        assert_eq!(lines[4], "3 . . . W B . . .");
        assert_eq!(lines[5], "4 . . . B W . . .");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Play a sequence of choices as legal moves, alternating sides and
    /// passing when the side to move is blocked
    fn play_out(choices: &[usize]) -> Board {
        let mut board = Board::new();
        let mut player = Player::Black;
        for &choice in choices {
            let moves = board.legal_moves(player);
            if moves.is_empty() {
                player = player.opponent();
                continue;
            }
            let pos = moves[choice % moves.len()];
            board.make_move(player, pos).unwrap();
            player = player.opponent();
        }
        board
    }

    proptest! {
        /// legal_moves() must agree with is_legal_move() on every cell
        #[test]
        fn prop_legal_moves_match_predicate(choices in prop::collection::vec(0usize..64, 0..30)) {
            let board = play_out(&choices);
            for player in [Player::Black, Player::White] {
                let listed = board.legal_moves(player);
                for index in 0..CELL_COUNT {
                    let pos = Position::from_index(index);
                    prop_assert_eq!(listed.contains(&pos), board.is_legal_move(player, pos));
                }
            }
        }

        /// A legal move adds exactly one disc and moves `flipped` discs across
        #[test]
        fn prop_piece_count_conservation(choices in prop::collection::vec(0usize..64, 0..30), pick in 0usize..64) {
            let board = play_out(&choices);
            for player in [Player::Black, Player::White] {
                let moves = board.legal_moves(player);
                if moves.is_empty() {
                    continue;
                }
                let mut next = Board::from_state(&board.state()).unwrap();
                let (black, white) = next.piece_counts();
                let flipped = next.make_move(player, moves[pick % moves.len()]).unwrap();
                prop_assert!(flipped >= 1);

                let (black_after, white_after) = next.piece_counts();
                prop_assert_eq!(black_after + white_after, black + white + 1);
                match player {
                    Player::Black => prop_assert_eq!(white_after, white - flipped),
                    Player::White => prop_assert_eq!(black_after, black - flipped),
                }
            }
        }

        /// Illegal moves must leave the board untouched
        #[test]
        fn prop_illegal_moves_do_not_mutate(choices in prop::collection::vec(0usize..64, 0..30), index in 0usize..64) {
            let board = play_out(&choices);
            let pos = Position::from_index(index);
            if !board.is_legal_move(Player::Black, pos) {
                let mut copy = Board::from_state(&board.state()).unwrap();
                prop_assert!(copy.make_move(Player::Black, pos).is_err());
                prop_assert_eq!(copy, board);
            }
        }

        /// Piece count never exceeds 64
        #[test]
        fn prop_piece_count_never_exceeds_64(choices in prop::collection::vec(0usize..64, 0..70)) {
            let board = play_out(&choices);
            let (black, white) = board.piece_counts();
            prop_assert!(usize::from(black + white) <= CELL_COUNT);
        }
    }
}
