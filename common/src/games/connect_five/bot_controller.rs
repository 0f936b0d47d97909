use std::collections::VecDeque;

use crate::games::SessionRng;
use super::game_state::ConnectFiveGameState;
use super::types::Position;

pub trait MoveSelector {
    fn select_move(&mut self, game: &ConnectFiveGameState) -> Option<Position>;

    fn name(&self) -> &str;
}

impl<T: MoveSelector + ?Sized> MoveSelector for Box<T> {
    fn select_move(&mut self, game: &ConnectFiveGameState) -> Option<Position> {
        (**self).select_move(game)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub struct RandomMoveSelector {
    rng: SessionRng,
}

impl RandomMoveSelector {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(&mut self, game: &ConnectFiveGameState) -> Option<Position> {
        if game.is_over() {
            return None;
        }
        let available_moves = game.legal_moves();
        self.rng.choose(&available_moves).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

pub struct ScriptedMoveSelector {
    moves: VecDeque<Position>,
}

impl ScriptedMoveSelector {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSelector for ScriptedMoveSelector {
    fn select_move(&mut self, _game: &ConnectFiveGameState) -> Option<Position> {
        self.moves.pop_front()
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_five::GameSettings;

    fn new_game() -> ConnectFiveGameState {
        ConnectFiveGameState::new(GameSettings::square(5)).unwrap()
    }

    #[test]
    fn test_random_selector_returns_legal_moves() {
        let mut game = new_game();
        let mut selector = RandomMoveSelector::from_seed(7);

        for _ in 0..10 {
            let position = selector.select_move(&game).unwrap();
            assert!(game.is_legal_move(position));
            game.make_move(position).unwrap();
        }
    }

    #[test]
    fn test_random_selector_is_reproducible_for_a_seed() {
        let game = new_game();
        let mut first = RandomMoveSelector::from_seed(99);
        let mut second = RandomMoveSelector::from_seed(99);

        for _ in 0..5 {
            assert_eq!(first.select_move(&game), second.select_move(&game));
        }
    }

    #[test]
    fn test_random_selector_has_nothing_on_finished_game() {
        let mut game = ConnectFiveGameState::new(GameSettings::new(1, 2, 2)).unwrap();
        game.make_move(Position::new(0, 0)).unwrap();
        game.make_move(Position::new(0, 1)).unwrap();
        let mut selector = RandomMoveSelector::from_seed(3);

        assert!(game.is_over());
        assert_eq!(selector.select_move(&game), None);
    }

    #[test]
    fn test_random_selector_has_nothing_after_a_win_with_empty_cells_left() {
        let mut game = new_game();
        for (row, col) in [(0, 0), (2, 0), (0, 1), (2, 1), (0, 2), (2, 2), (0, 3), (3, 4), (0, 4)] {
            game.make_move(Position::new(row, col)).unwrap();
        }
        let mut selector = RandomMoveSelector::from_seed(3);

        assert!(game.is_over());
        assert_eq!(game.legal_moves().len(), 16);
        assert_eq!(selector.select_move(&game), None);
    }

    #[test]
    fn test_scripted_selector_replays_in_order() {
        let game = new_game();
        let mut selector = ScriptedMoveSelector::new([Position::new(1, 1), Position::new(0, 4)]);

        assert_eq!(selector.select_move(&game), Some(Position::new(1, 1)));
        assert_eq!(selector.select_move(&game), Some(Position::new(0, 4)));
        assert_eq!(selector.remaining(), 0);
        assert_eq!(selector.select_move(&game), None);
    }

    #[test]
    fn test_boxed_selector_delegates() {
        let game = new_game();
        let mut selector: Box<dyn MoveSelector> = Box::new(RandomMoveSelector::from_seed(5));

        assert_eq!(selector.name(), "Random");
        assert!(selector.select_move(&game).is_some());
    }
}
