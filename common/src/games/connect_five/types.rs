use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, direction: Direction, steps: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(direction.d_row * steps)?;
        let col = self.col.checked_add_signed(direction.d_col * steps)?;
        Some(Position::new(row, col))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const VERTICAL: Direction = Direction { d_row: 1, d_col: 0 };
    pub const HORIZONTAL: Direction = Direction { d_row: 0, d_col: 1 };
    pub const DIAGONAL: Direction = Direction { d_row: 1, d_col: 1 };
    pub const ANTI_DIAGONAL: Direction = Direction { d_row: 1, d_col: -1 };

    pub const ALL: [Direction; 4] = [
        Direction::VERTICAL,
        Direction::HORIZONTAL,
        Direction::DIAGONAL,
        Direction::ANTI_DIAGONAL,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Win(player) => write!(f, "{} won", player),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position, direction: Direction) -> Self {
        Self {
            player,
            start,
            end,
            direction,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let length = if self.direction.d_row != 0 {
            self.end.row.abs_diff(self.start.row)
        } else {
            self.end.col.abs_diff(self.start.col)
        } + 1;
        (0..length as isize).filter_map(move |step| self.start.offset(self.direction, step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_rejects_negative_coordinates() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.offset(Direction::HORIZONTAL, -1), None);
        assert_eq!(origin.offset(Direction::ANTI_DIAGONAL, 2), None);
        assert_eq!(
            Position::new(2, 3).offset(Direction::ANTI_DIAGONAL, 2),
            Some(Position::new(4, 1))
        );
    }

    #[test]
    fn test_winning_line_positions_walk_anti_diagonal() {
        let line = WinningLine::new(
            Player::White,
            Position::new(0, 4),
            Position::new(4, 0),
            Direction::ANTI_DIAGONAL,
        );

        let positions: Vec<Position> = line.positions().collect();

        assert_eq!(positions.len(), 5);
        assert_eq!(positions[2], Position::new(2, 2));
        assert_eq!(positions[4], Position::new(4, 0));
    }

    #[test]
    fn test_player_and_cell_conversions() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.cell(), Cell::White);
        assert_eq!(Cell::Black.owner(), Some(Player::Black));
        assert_eq!(Cell::Empty.owner(), None);
    }
}
