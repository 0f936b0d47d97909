use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Cell, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSymbols {
    pub black: char,
    pub white: char,
    pub empty: char,
}

impl Default for CellSymbols {
    fn default() -> Self {
        Self {
            black: 'x',
            white: 'o',
            empty: '-',
        }
    }
}

impl CellSymbols {
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Black => self.black,
            Cell::White => self.white,
            Cell::Empty => self.empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    columns: usize,
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Empty; columns]; rows],
            rows,
            columns,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let cells: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        'x' => Cell::Black,
                        'o' => Cell::White,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();
        let columns = cells.first().map_or(0, Vec::len);
        Self {
            rows: cells.len(),
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.columns
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row][position.col] = cell;
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| !cell.is_empty()).count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn render(&self, symbols: &CellSymbols) -> String {
        let mut output = String::with_capacity(self.rows * (self.columns * 2 + 1) + 1);
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|&cell| symbols.symbol(cell).to_string()).collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        }
        output.push('\n');
        output
    }

    pub fn dump(&self) -> String {
        self.render(&CellSymbols::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = CellSymbols::default();
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|&cell| symbols.symbol(cell).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
