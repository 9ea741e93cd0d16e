use crate::{Error, Position, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square letter matrix, one character per cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from rows, rejecting empty or non-square input
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let size = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != size) {
            return Err(Error::NotSquare {
                rows: size,
                columns: bad.len(),
            });
        }
        Ok(Self { cells: rows })
    }

    /// Parse rows of space-separated letters, one row per line
    pub fn from_string(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().flat_map(str::chars).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Crate-internal constructor for a grid the caller knows is square
    pub(crate) fn from_square(cells: Vec<Vec<char>>) -> Self {
        debug_assert!(cells.iter().all(|row| row.len() == cells.len()));
        Self { cells }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Letter at `(row, col)`; panics outside the grid
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    /// Every position, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size();
        (0..size).flat_map(move |col| (0..size).map(move |row| Position::new(row, col)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec!['P', 'E'], vec!['R', 'O']]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(Position::new(1, 0)), Some('R'));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.at(0, 1), 'E');
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(vec![]), Err(Error::EmptyGrid));
        assert_eq!(
            Grid::from_rows(vec![vec!['A', 'B'], vec!['C']]),
            Err(Error::NotSquare { rows: 2, columns: 1 })
        );
        assert_eq!(
            Grid::from_rows(vec![vec!['A', 'B', 'C'], vec!['D', 'E', 'F']]),
            Err(Error::NotSquare { rows: 2, columns: 3 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let text = "C A S\nÑ O T\nX Y Z";
        let grid = Grid::from_string(text).unwrap();
        assert_eq!(grid.at(1, 0), 'Ñ');
        assert_eq!(grid.to_string(), text);
        assert_eq!(Grid::from_string(&grid.to_string()).unwrap(), grid);
    }

    #[test]
    fn test_positions_cover_grid() {
        let grid = Grid::from_string("A B\nC D").unwrap();
        let all: Vec<Position> = grid.positions().collect();
        assert_eq!(
            all,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
