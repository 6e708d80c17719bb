//! Rule engines for the two game variants
//!
//! Both engines own their board and auxiliary state outright; the GUI holds
//! no game state of its own and works purely from [`Snapshot`]s and
//! [`MoveOutcome`]s. All operations are synchronous and never block; the
//! caller serializes input events (one at a time).

pub mod classic;
pub mod queue;

// Re-exports
pub use classic::{ClassicEngine, AUTO_RESET_DELAY};
pub use queue::QueueEngine;

use std::time::Duration;

use thiserror::Error;

use crate::board::{Board, Player, Pos};

/// Outer game state machine, shared by both variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are being accepted
    InProgress,
    /// The given player completed a line; terminal until reset
    Won(Player),
    /// Board full with no winner; terminal until reset
    Draw,
}

impl GameStatus {
    /// True once the game has ended; no further moves are accepted
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was rejected. Every rejection leaves engine state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid; a caller bug, rejected defensively
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfRange { row: i32, col: i32 },
    /// Move attempted after a terminal status
    #[error("the game is over; reset to play again")]
    GameOver,
    /// Target cell already holds a mark
    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),
    /// Target cell is flagged for removal and cannot be reused until erased
    #[error("cell {0} is temporarily blocked")]
    CellLocked(Pos),
}

/// A mark flagged for deferred removal.
///
/// The mark stays visible and countable until its owner's next successful
/// placement erases it; until then the cell rejects new marks from either
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMark {
    pub pos: Pos,
    pub owner: Player,
}

/// Everything an accepted move changed, for the caller to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the mark was placed
    pub placed: Pos,
    /// Who placed it
    pub by: Player,
    /// The board after the move
    pub board: Board,
    /// Status after the move
    pub status: GameStatus,
    /// Player to move next (unchanged from `by` on a terminal move)
    pub next_player: Player,
    /// The completed line, when `status` is `Won`
    pub winning_line: Option<[Pos; 3]>,
    /// Cell that just became flagged for removal (queue variant)
    pub newly_pending: Option<Pos>,
    /// Cell that was erased just before this placement (queue variant)
    pub erased: Option<Pos>,
    /// Ask the caller to schedule a `reset()` after this delay
    pub auto_reset_after: Option<Duration>,
}

/// Read-only view of engine state for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub status: GameStatus,
    pub current_player: Player,
    /// Outstanding pending-removal marks, at most one per player
    /// (queue variant; always empty for the classic engine)
    pub pending: [Option<PendingMark>; 2],
    /// The completed line, when `status` is `Won`
    pub winning_line: Option<[Pos; 3]>,
}

impl Snapshot {
    /// Whether the cell at `pos` is flagged for removal
    pub fn is_pending(&self, pos: Pos) -> bool {
        self.pending.iter().flatten().any(|mark| mark.pos == pos)
    }

    /// The outstanding pending-removal mark of the given player, if any
    pub fn pending_for(&self, player: Player) -> Option<PendingMark> {
        self.pending
            .iter()
            .flatten()
            .copied()
            .find(|mark| mark.owner == player)
    }
}
