//! Player-facing agents.
//!
//! An [`Agent`] is asked for one move per turn by whatever drives the game.
//! `None` means the agent has no legal move and passes this turn.

use log::{debug, info};
use othello_board::{Board, Player, Position};

use crate::cache::TakenCellCache;
use crate::config::SearchConfig;
use crate::eval::{EdgeCornerMobility, Evaluator};
use crate::movegen::legal_moves;
use crate::search::{Role, SearchResult, SearchStats, Searcher};

/// Trait defining the interface between a game loop and a player
pub trait Agent {
    /// The colour this agent plays
    fn color(&self) -> Player;

    /// Choose a move on `board`, which must reflect every move played so far.
    /// Returns None when there is no legal move.
    fn next_move(&mut self, board: &Board) -> Option<Position>;
}

/// Minimax player with alpha-beta pruning.
///
/// Keeps a taken-cell cache across turns: each turn it picks up the cells
/// filled since its last move, searches, and records its own move.
pub struct MinimaxAgent<E: Evaluator = EdgeCornerMobility> {
    color: Player,
    config: SearchConfig,
    evaluator: E,
    cache: TakenCellCache,
    seeded: bool,
    last_search: Option<(SearchResult, SearchStats)>,
}

impl MinimaxAgent {
    /// The cache starts seeded with the four centre cells of the opening.
    /// On the first turn any of them that is empty on the real board is
    /// dropped again, so the agent can join a game from any position.
    pub fn new(color: Player, config: SearchConfig) -> Self {
        Self::with_evaluator(color, config, EdgeCornerMobility)
    }
}

impl<E: Evaluator> MinimaxAgent<E> {
    pub fn with_evaluator(color: Player, config: SearchConfig, evaluator: E) -> Self {
        Self {
            color,
            config,
            evaluator,
            cache: TakenCellCache::new(),
            seeded: true,
            last_search: None,
        }
    }

    /// Replace the starting cache, e.g. with an empty one when the agent joins
    /// a game that did not start from the standard opening
    pub fn with_cache(mut self, cache: TakenCellCache) -> Self {
        self.cache = cache;
        self.seeded = false;
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn cache(&self) -> &TakenCellCache {
        &self.cache
    }

    /// Result and counters of the most recent root search
    pub fn last_search(&self) -> Option<(SearchResult, SearchStats)> {
        self.last_search
    }
}

impl<E: Evaluator> Agent for MinimaxAgent<E> {
    fn color(&self) -> Player {
        self.color
    }

    fn next_move(&mut self, board: &Board) -> Option<Position> {
        if self.seeded {
            let dropped = self.cache.drop_vacant_center(board);
            if dropped > 0 {
                debug!("{:?} dropped {} vacant centre cells from its cache", self.color, dropped);
            }
            self.seeded = false;
        }
        self.cache.refresh(board);

        if legal_moves(board, &self.cache, self.color).is_empty() {
            info!("{:?} has no legal move, passing", self.color);
            self.last_search = None;
            return None;
        }

        let mut searcher = Searcher::new(self.color, &self.evaluator).with_pruning(self.config.pruning);
        let result = searcher.search(
            &mut self.cache,
            board,
            self.config.depth,
            i32::MIN,
            i32::MAX,
            Role::Me,
        );
        let stats = searcher.stats();
        debug!(
            "depth {} search for {:?}: score {}, {} nodes, {} leaves, {} cutoffs, {} passes",
            self.config.depth,
            self.color,
            result.score,
            stats.nodes,
            stats.leaves,
            stats.cutoffs,
            stats.passes
        );
        self.last_search = Some((result, stats));

        let chosen = result.best_move?;
        self.cache.add(chosen);
        info!("{:?} plays {}", self.color, chosen);
        Some(chosen)
    }
}
