use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::connect_five::{CellSymbols, GameSettings};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "connect_five_config.yaml";
const MAX_GAMES: u32 = 10_000;
const MAX_MOVE_DELAY_MS: u64 = 60_000;
const MAX_BOARD_SIDE: usize = 50;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    /// Pause between moves; 0 plays the game out at once.
    pub move_delay_ms: u64,
    /// Fixed seed for reproducible series; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub games: u32,
    pub print_board: bool,
    #[serde(default)]
    pub symbols: CellSymbols,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.game.rows > MAX_BOARD_SIDE || self.game.columns > MAX_BOARD_SIDE {
            return Err(format!("Board sides must not exceed {}", MAX_BOARD_SIDE));
        }
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("Games must be between 1 and {}", MAX_GAMES));
        }
        if self.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(format!("Move delay must not exceed {} ms", MAX_MOVE_DELAY_MS));
        }
        let glyphs = [self.symbols.black, self.symbols.white, self.symbols.empty];
        if glyphs.iter().any(|c| c.is_whitespace()) {
            return Err("Board symbols must not be whitespace".to_string());
        }
        if glyphs[0] == glyphs[1] || glyphs[0] == glyphs[2] || glyphs[1] == glyphs[2] {
            return Err("Board symbols must be distinct".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            move_delay_ms: 500,
            seed: None,
            games: 1,
            print_board: true,
            symbols: CellSymbols::default(),
        }
    }
}
