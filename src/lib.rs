//! Two-variant tic-tac-toe with a desktop GUI
//!
//! A two-player tic-tac-toe game shipping two rule sets over one board
//! model:
//! - Classic: marks stay forever; first complete line wins, full board
//!   draws, and a finished game resets itself after a fixed delay.
//! - Queue mode: each player keeps at most three marks; a fourth placement
//!   flags the oldest for removal, and the flagged mark is erased right
//!   before that player's next placement.
//!
//! # Architecture
//!
//! - [`board`]: the 3x3 grid, cells, players and positions
//! - [`rules`]: line-of-three win detection
//! - [`engine`]: the two rule engines and their shared outcome types
//! - [`ui`]: egui/eframe front end rendering engine snapshots
//!
//! The engines own all game state. The GUI renders [`engine::Snapshot`]s
//! and feeds clicks into [`engine::ClassicEngine::attempt_move`] or
//! [`engine::QueueEngine::attempt_move`]; widgets hold no state of their
//! own.
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{ClassicEngine, GameStatus, Player};
//!
//! let mut game = ClassicEngine::new();
//! // X takes the top row while O answers in the middle row
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.attempt_move(row, col).unwrap();
//! }
//! let outcome = game.attempt_move(0, 2).unwrap();
//! assert_eq!(outcome.status, GameStatus::Won(Player::X));
//! ```

pub mod board;
pub mod engine;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use engine::{
    ClassicEngine, GameStatus, MoveError, MoveOutcome, PendingMark, QueueEngine, Snapshot,
};
