use crate::log;
use super::bot_controller::MoveSelector;
use super::error::GameError;
use super::game_state::ConnectFiveGameState;
use super::types::{GameOutcome, Player, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchStep {
    pub player: Player,
    pub position: Position,
    pub outcome: GameOutcome,
}

pub struct GameMatch<B: MoveSelector, W: MoveSelector> {
    game: ConnectFiveGameState,
    black: B,
    white: W,
}

impl<B: MoveSelector, W: MoveSelector> GameMatch<B, W> {
    pub fn new(game: ConnectFiveGameState, black: B, white: W) -> Self {
        Self { game, black, white }
    }

    pub fn game(&self) -> &ConnectFiveGameState {
        &self.game
    }

    pub fn into_game(self) -> ConnectFiveGameState {
        self.game
    }

    pub fn step(&mut self) -> Result<MatchStep, GameError> {
        if self.game.is_over() {
            return Err(GameError::GameAlreadyOver(self.game.outcome()));
        }

        let player = self.game.current_player();
        let selector: &mut dyn MoveSelector = match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        };

        let position = selector
            .select_move(&self.game)
            .ok_or(GameError::NoMoveSelected(player))?;

        let outcome = match self.game.make_move(position) {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("{} ({}) tried {}: {}", player, selector.name(), position, e);
                return Err(e);
            }
        };

        log!("Move {}: {} plays {}", self.game.move_count(), player, position);
        if outcome.is_over() {
            log!("Game over after {} moves: {}", self.game.move_count(), outcome);
        }

        Ok(MatchStep {
            player,
            position,
            outcome,
        })
    }

    pub fn run_to_completion<F>(&mut self, mut observer: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&ConnectFiveGameState, &MatchStep),
    {
        while !self.game.is_over() {
            let step = self.step()?;
            observer(&self.game, &step);
        }
        Ok(self.game.outcome())
    }
}
