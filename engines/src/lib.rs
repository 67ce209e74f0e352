//! Othello Minimax Player
//!
//! Depth-limited minimax with alpha-beta pruning over an Othello board:
//! - `cache`: occupied-cell set maintained incrementally across turns
//! - `movegen`: legal move enumeration in a fixed column-major order
//! - `simulate`: isolated board copies for hypothetical moves
//! - `eval`: leaf heuristic
//! - `search`: the alpha-beta recursion, with forced-pass handling
//! - `agent`: the per-turn entry point
//! - `greedy`: one-ply capture-maximising baseline
//!
//! `compute_move(board: &[u8; 64], player: u8) -> u8` wraps the agent for
//! callers holding a flat board array.

pub mod agent;
pub mod cache;
pub mod config;
pub mod eval;
pub mod greedy;
pub mod movegen;
pub mod search;
pub mod simulate;

pub use agent::{Agent, MinimaxAgent};
pub use cache::{TakenCellCache, TakenGuard};
pub use config::{ConfigError, SearchConfig, DEFAULT_DEPTH};
pub use eval::{EdgeCornerMobility, Evaluator};
pub use greedy::GreedyAgent;
pub use search::{Role, SearchResult, SearchStats, Searcher};

use othello_board::{Board, Player, CELL_COUNT};

/// Flat board representation: 64 cells indexed row * 8 + col,
/// 0 = Empty, 1 = Black, 2 = White
pub type FlatBoard = [u8; CELL_COUNT];

/// Compute the minimax move for `player` (1 = Black, 2 = White) at the
/// default depth
///
/// # Returns
/// Action index (0-63), or u8::MAX if there is no legal move or the input is
/// not a valid board
pub fn compute_move(board: &FlatBoard, player: u8) -> u8 {
    compute_move_with_config(board, player, SearchConfig::default())
}

/// Same as [`compute_move`] with an explicit search configuration
pub fn compute_move_with_config(board: &FlatBoard, player: u8, config: SearchConfig) -> u8 {
    let Some(player) = Player::from_u8(player) else {
        return u8::MAX;
    };
    let Ok(board) = Board::from_state(board) else {
        return u8::MAX;
    };

    let mut agent = MinimaxAgent::new(player, config).with_cache(TakenCellCache::empty());
    agent
        .next_move(&board)
        .map_or(u8::MAX, |pos| pos.index() as u8)
}
