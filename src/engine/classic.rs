//! Classic tic-tac-toe rules
//!
//! Marks are never removed. The game ends on a completed line or a full
//! board, and a terminal game asks the caller to schedule an automatic
//! reset after a fixed delay.

use std::time::Duration;

use log::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::rules;

use super::{GameStatus, MoveError, MoveOutcome, Snapshot};

/// Delay before the caller should auto-reset a finished game
pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(10);

/// Standard two-player rule engine.
///
/// The engine owns the board; callers interact through [`attempt_move`],
/// [`reset`] and [`snapshot`] and render from the returned state.
///
/// [`attempt_move`]: ClassicEngine::attempt_move
/// [`reset`]: ClassicEngine::reset
/// [`snapshot`]: ClassicEngine::snapshot
pub struct ClassicEngine {
    board: Board,
    current: Player,
    status: GameStatus,
    winning_line: Option<[Pos; 3]>,
    on_terminal: Option<Box<dyn FnMut(GameStatus)>>,
}

impl ClassicEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            on_terminal: None,
        }
    }

    /// Register a handler invoked once when the status becomes terminal.
    ///
    /// The engine performs no timing itself; the handler is where the
    /// caller arranges the delayed auto-reset.
    pub fn on_terminal(&mut self, handler: impl FnMut(GameStatus) + 'static) {
        self.on_terminal = Some(Box::new(handler));
    }

    /// Attempt to place the current player's mark at (row, col).
    ///
    /// Rejected moves leave the engine untouched.
    pub fn attempt_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Pos::from_coords(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        if !self.board.is_empty_at(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mover = self.current;
        self.board.set(pos, mover.mark());
        debug!("player {mover} placed at {pos}");

        let mut auto_reset_after = None;
        if let Some(line) = rules::find_line(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            self.winning_line = Some(line);
            info!("player {mover} wins");
            auto_reset_after = Some(AUTO_RESET_DELAY);
            self.fire_terminal();
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("game drawn");
            auto_reset_after = Some(AUTO_RESET_DELAY);
            self.fire_terminal();
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
            newly_pending: None,
            erased: None,
            auto_reset_after,
        })
    }

    /// Clear the board and start over with player X
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        debug!("game reset");
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            status: self.status,
            current_player: self.current,
            pending: [None, None],
            winning_line: self.winning_line,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    fn fire_terminal(&mut self) {
        let status = self.status;
        if let Some(handler) = self.on_terminal.as_mut() {
            handler(status);
        }
    }
}

impl Default for ClassicEngine {
    fn default() -> Self {
        Self::new()
    }
}
