use std::time::Duration;

use common::connect_five::{
    ConnectFiveGameState, GameError, GameMatch, GameOutcome, Player, RandomMoveSelector,
};
use common::{SessionRng, log};

use crate::config::Config;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeriesTally {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
}

impl SeriesTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::Black) => self.black_wins += 1,
            GameOutcome::Win(Player::White) => self.white_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }
}

/// Plays `config.games` random-vs-random games, stopping early on Ctrl+C.
pub async fn run_series(config: &Config) -> Result<SeriesTally, GameError> {
    let base_rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting {} game(s) on a {}x{} board, win length {}, seed {}",
        config.games,
        config.game.rows,
        config.game.columns,
        config.game.win_length,
        base_rng.seed()
    );

    let mut tally = SeriesTally::default();
    for index in 0..config.games {
        let outcome = tokio::select! {
            result = play_game(config, &base_rng, index) => result?,
            _ = tokio::signal::ctrl_c() => {
                log!("Interrupted during game {}", index + 1);
                break;
            }
        };
        tally.record(outcome);
    }

    Ok(tally)
}

async fn play_game(config: &Config, base_rng: &SessionRng, index: u32) -> Result<GameOutcome, GameError> {
    let game = ConnectFiveGameState::new(config.game)?;
    let black = RandomMoveSelector::new(base_rng.derive(u64::from(index) * 2));
    let white = RandomMoveSelector::new(base_rng.derive(u64::from(index) * 2 + 1));
    let mut game_match = GameMatch::new(game, black, white);
    let delay = Duration::from_millis(config.move_delay_ms);

    while !game_match.game().is_over() {
        game_match.step()?;

        if config.print_board {
            print!("{}", game_match.game().board().render(&config.symbols));
        }

        if !game_match.game().is_over() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let game = game_match.game();
    let outcome = game.outcome();
    match game.winning_line() {
        Some(line) => println!(
            "Game {} over: {} ({} to {}) after {} moves",
            index + 1,
            outcome,
            line.start,
            line.end,
            game.move_count()
        ),
        None => println!("Game {} over: {} after {} moves", index + 1, outcome, game.move_count()),
    }

    Ok(outcome)
}
