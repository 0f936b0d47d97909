mod config;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::{log, logger};

use config::{Config, get_config_manager};
use runner::run_series;

#[derive(Parser)]
#[command(name = "connect_five_console", about = "Random-vs-random Connect Five in the terminal")]
struct Args {
    /// YAML config file; defaults to connect_five_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    columns: Option<usize>,

    #[arg(long)]
    win_length: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    games: Option<u32>,

    /// Skip the board dump after each move
    #[arg(long)]
    quiet: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.game.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.game.columns = columns;
        }
        if let Some(win_length) = self.win_length {
            config.game.win_length = win_length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.move_delay_ms = delay_ms;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if self.quiet {
            config.print_board = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config.clone()).get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    let tally = run_series(&config).await?;

    log!(
        "Played {} game(s): Black {}, White {}, draws {}",
        tally.games(),
        tally.black_wins,
        tally.white_wins,
        tally.draws
    );

    Ok(())
}
