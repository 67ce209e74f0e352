//! Play the minimax agent against the greedy baseline and print the game.
//!
//! Usage: cargo run --release --example self_play [depth]

use othello_board::{Board, Player};
use othello_minimax::{Agent, GreedyAgent, MinimaxAgent, SearchConfig, DEFAULT_DEPTH};

fn main() {
    let depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);

    let mut minimax = MinimaxAgent::new(Player::Black, SearchConfig::with_depth(depth));
    let mut greedy = GreedyAgent::new(Player::White);
    let mut board = Board::new();
    let mut player = Player::Black;
    let mut consecutive_passes = 0;

    println!("=== Minimax (Black, depth {}) vs Greedy (White) ===\n", depth);
    println!("{}", board);

    while consecutive_passes < 2 && !board.is_full() {
        let agent: &mut dyn Agent = match player {
            Player::Black => &mut minimax,
            Player::White => &mut greedy,
        };

        match agent.next_move(&board) {
            Some(pos) => {
                if let Err(err) = board.make_move(player, pos) {
                    eprintln!("{:?} returned a bad move: {}", player, err);
                    return;
                }
                consecutive_passes = 0;
                println!("{:?} plays {}", player, pos);
                println!("{}", board);
            }
            None => {
                consecutive_passes += 1;
                println!("{:?} passes\n", player);
            }
        }
        player = player.opponent();
    }

    let (black, white) = board.piece_counts();
    println!("Final score: Black {} - White {}", black, white);
    match board.winner() {
        Some(winner) => println!("{:?} wins", winner),
        None => println!("Draw"),
    }
}
