//! Queue-variant rules
//!
//! Turns alternate as in the classic game, but each player may hold at most
//! three unflagged marks. A fourth placement flags that player's oldest mark
//! for removal; the flagged mark stays on the board (and still counts toward
//! a line) until it is erased immediately before the same player's next
//! placement. A flagged cell accepts no new mark from either player until
//! then.
//!
//! There is no draw detection: eviction keeps freeing cells, so the board
//! can never fill up under alternating play.

use std::collections::VecDeque;

use log::{debug, info};

use crate::board::{Board, Cell, Player, Pos};
use crate::rules;

use super::{GameStatus, MoveError, MoveOutcome, PendingMark, Snapshot};

/// Most unflagged marks a player may have on the board at once
pub const QUEUE_CAPACITY: usize = 3;

/// Bounded FIFO of a player's placements, oldest first
#[derive(Debug, Clone, Default)]
struct MoveQueue {
    cells: VecDeque<Pos>,
}

impl MoveQueue {
    /// Record a placement. Returns the evicted oldest coordinate when the
    /// queue overflows its capacity.
    fn push(&mut self, pos: Pos) -> Option<Pos> {
        self.cells.push_back(pos);
        if self.cells.len() > QUEUE_CAPACITY {
            self.cells.pop_front()
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}

/// Rule engine for the bounded-marks variant.
///
/// Same outer state machine as [`ClassicEngine`], different move semantics.
/// Each player carries at most one flagged mark at a time; a player resolves
/// their own flag (the erasure) at the start of their next placement, before
/// any new overflow of theirs can raise another.
///
/// [`ClassicEngine`]: super::ClassicEngine
#[derive(Debug, Clone)]
pub struct QueueEngine {
    board: Board,
    current: Player,
    status: GameStatus,
    winning_line: Option<[Pos; 3]>,
    x_moves: MoveQueue,
    o_moves: MoveQueue,
    x_pending: Option<Pos>,
    o_pending: Option<Pos>,
}

impl QueueEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            x_moves: MoveQueue::default(),
            o_moves: MoveQueue::default(),
            x_pending: None,
            o_pending: None,
        }
    }

    /// Attempt to place the current player's mark at (row, col).
    ///
    /// Flagged cells are checked before occupancy: a flagged mark is still
    /// on the board, and the caller needs the distinct "temporarily blocked"
    /// rejection for it. Rejected moves leave the engine untouched; an
    /// accepted move first erases the mover's own flagged mark (if any),
    /// then places.
    pub fn attempt_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Pos::from_coords(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        if self.is_locked(pos) {
            return Err(MoveError::CellLocked(pos));
        }
        if !self.board.is_empty_at(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mover = self.current;

        // Resolve the mover's outstanding removal before placing.
        let mut erased = None;
        if let Some(old) = self.take_pending(mover) {
            self.board.set(old, Cell::Empty);
            erased = Some(old);
            debug!("erased {old} of player {mover}");
        }

        self.board.set(pos, mover.mark());
        debug!("player {mover} placed at {pos}");

        let mut newly_pending = None;
        if let Some(oldest) = self.queue_mut(mover).push(pos) {
            // Flag only; the mark stays until the mover's next placement.
            self.set_pending(mover, oldest);
            newly_pending = Some(oldest);
            debug!("flagged {oldest} of player {mover} for removal");
        }

        // The line check sees the board as it stands, flagged marks included.
        if let Some(line) = rules::find_line(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            self.winning_line = Some(line);
            info!("player {mover} wins");
        } else {
            self.current = mover.opponent();
        }

        Ok(MoveOutcome {
            placed: pos,
            by: mover,
            board: self.board,
            status: self.status,
            next_player: self.current,
            winning_line: self.winning_line,
            newly_pending,
            erased,
            auto_reset_after: None,
        })
    }

    /// Clear the board, both queues and all flags; X starts
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.x_moves.clear();
        self.o_moves.clear();
        self.x_pending = None;
        self.o_pending = None;
        debug!("game reset");
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        let mark = |player: Player, pos: Option<Pos>| {
            pos.map(|pos| PendingMark { pos, owner: player })
        };
        Snapshot {
            board: self.board,
            status: self.status,
            current_player: self.current,
            pending: [
                mark(Player::X, self.x_pending),
                mark(Player::O, self.o_pending),
            ],
            winning_line: self.winning_line,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    fn is_locked(&self, pos: Pos) -> bool {
        self.x_pending == Some(pos) || self.o_pending == Some(pos)
    }

    fn queue_mut(&mut self, player: Player) -> &mut MoveQueue {
        match player {
            Player::X => &mut self.x_moves,
            Player::O => &mut self.o_moves,
        }
    }

    fn take_pending(&mut self, player: Player) -> Option<Pos> {
        match player {
            Player::X => self.x_pending.take(),
            Player::O => self.o_pending.take(),
        }
    }

    fn set_pending(&mut self, player: Player, pos: Pos) {
        match player {
            Player::X => self.x_pending = Some(pos),
            Player::O => self.o_pending = Some(pos),
        }
    }
}

impl Default for QueueEngine {
    fn default() -> Self {
        Self::new()
    }
}
