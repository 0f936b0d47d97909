mod board;
mod bot_controller;
mod error;
mod game_state;
mod match_runner;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, CellSymbols};
pub use bot_controller::{MoveSelector, RandomMoveSelector, ScriptedMoveSelector};
pub use error::{GameError, InvalidMoveReason};
pub use game_state::ConnectFiveGameState;
pub use match_runner::{GameMatch, MatchStep};
pub use settings::{DEFAULT_BOARD_SIDE, DEFAULT_WIN_LENGTH, GameSettings};
pub use types::{Cell, Direction, GameOutcome, Player, Position, WinningLine};
pub use win_detector::{check_line, check_win, check_win_at};
