use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_BOARD_SIDE: usize = 15;
pub const DEFAULT_WIN_LENGTH: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub rows: usize,
    pub columns: usize,
    // Exact length; longer runs do not win.
    pub win_length: usize,
}

impl GameSettings {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Self {
        Self {
            rows,
            columns,
            win_length,
        }
    }

    pub fn square(side: usize) -> Self {
        Self::new(side, side, DEFAULT_WIN_LENGTH)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::square(DEFAULT_BOARD_SIDE)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 {
            return Err("Rows must be positive".to_string());
        }
        if self.columns == 0 {
            return Err("Columns must be positive".to_string());
        }
        if self.win_length == 0 {
            return Err("Win length must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();

        assert_eq!(settings, GameSettings::new(15, 15, 5));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_values_are_rejected() {
        assert!(GameSettings::new(0, 5, 5).validate().is_err());
        assert!(GameSettings::new(5, 0, 5).validate().is_err());
        assert!(GameSettings::new(5, 5, 0).validate().is_err());
    }

    #[test]
    fn test_boards_smaller_than_win_length_are_allowed() {
        assert!(GameSettings::new(4, 4, 5).validate().is_ok());
        assert!(GameSettings::new(2, 2, 5).validate().is_ok());
        assert!(GameSettings::new(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_large_boards_are_allowed() {
        assert!(GameSettings::square(60).validate().is_ok());
    }
}
