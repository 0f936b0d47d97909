use super::board::Board;
use super::types::{Cell, Direction, Position, WinningLine};

fn cell_at(board: &Board, row: isize, col: isize) -> Option<Cell> {
    if row < 0 || col < 0 {
        return None;
    }
    board.get(Position::new(row as usize, col as usize))
}

pub fn check_line(
    board: &Board,
    position: Position,
    direction: Direction,
    win_length: usize,
) -> Option<WinningLine> {
    let cell = board.get(position)?;
    let player = cell.owner()?;
    let Direction { d_row, d_col } = direction;
    let (row, col) = (position.row as isize, position.col as isize);

    let (mut min_row, mut min_col) = (row - d_row, col - d_col);
    while cell_at(board, min_row, min_col) == Some(cell) {
        min_row -= d_row;
        min_col -= d_col;
    }

    let (mut max_row, mut max_col) = (row + d_row, col + d_col);
    while cell_at(board, max_row, max_col) == Some(cell) {
        max_row += d_row;
        max_col += d_col;
    }

    let length = if d_row != 0 {
        (max_row - min_row).unsigned_abs() - 1
    } else {
        (max_col - min_col).unsigned_abs() - 1
    };

    if length != win_length {
        return None;
    }

    let open = match (cell_at(board, min_row, min_col), cell_at(board, max_row, max_col)) {
        (None, _) | (_, None) => true,
        (Some(before), Some(after)) => before.is_empty() || after.is_empty(),
    };

    if !open {
        return None;
    }

    let start = Position::new((min_row + d_row) as usize, (min_col + d_col) as usize);
    let end = Position::new((max_row - d_row) as usize, (max_col - d_col) as usize);
    Some(WinningLine::new(player, start, end, direction))
}

pub fn check_win_at(board: &Board, position: Position, win_length: usize) -> Option<WinningLine> {
    Direction::ALL
        .into_iter()
        .find_map(|direction| check_line(board, position, direction, win_length))
}

pub fn check_win(board: &Board, win_length: usize) -> Option<WinningLine> {
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            let position = Position::new(row, col);
            if board.get(position) == Some(Cell::Empty) {
                continue;
            }
            if let Some(line) = check_win_at(board, position, win_length) {
                return Some(line);
            }
        }
    }
    None
}
