use crate::config::Validate;
use super::board::Board;
use super::error::{GameError, InvalidMoveReason};
use super::settings::GameSettings;
use super::types::{Cell, GameOutcome, Player, Position, WinningLine};
use super::win_detector::check_win_at;

#[derive(Clone, Debug)]
pub struct ConnectFiveGameState {
    board: Board,
    settings: GameSettings,
    history: Vec<Position>,
    outcome: GameOutcome,
    winning_line: Option<WinningLine>,
}

impl ConnectFiveGameState {
    pub fn new(settings: GameSettings) -> Result<Self, GameError> {
        settings.validate().map_err(GameError::InvalidSettings)?;

        Ok(Self {
            board: Board::new(settings.rows, settings.columns),
            settings,
            history: Vec::with_capacity(settings.rows * settings.columns),
            outcome: GameOutcome::InProgress,
            winning_line: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.board.get(position)
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    pub fn current_player(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves()
    }

    pub fn is_legal_move(&self, position: Position) -> bool {
        self.validate_move(position).is_ok()
    }

    fn validate_move(&self, position: Position) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameAlreadyOver(self.outcome));
        }

        match self.board.get(position) {
            None => Err(GameError::InvalidMove {
                position,
                reason: InvalidMoveReason::OutOfBounds,
            }),
            Some(Cell::Empty) => Ok(()),
            Some(_) => Err(GameError::InvalidMove {
                position,
                reason: InvalidMoveReason::Occupied,
            }),
        }
    }

    pub fn make_move(&mut self, position: Position) -> Result<GameOutcome, GameError> {
        self.validate_move(position)?;

        let player = self.current_player();
        self.board.set(position, player.cell());
        self.history.push(position);

        self.check_game_over(position);

        Ok(self.outcome)
    }

    fn check_game_over(&mut self, last_move: Position) {
        if let Some(line) = check_win_at(&self.board, last_move, self.settings.win_length) {
            self.outcome = GameOutcome::Win(line.player);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        }
    }
}
