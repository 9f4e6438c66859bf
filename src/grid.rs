use std::collections::BTreeSet;
use std::fmt;

use super::{Direction, Error, Letter, LetterScoring, Placement, Position, Table, Tile, BOARD_SIZE};

/// The 15x15 squares, each empty or holding a tile
///
/// Tiles are never removed once placed, so `is_empty` only goes from true to false.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Table<Option<Tile>>,
    is_empty: bool,
    /// Occupied squares with at least one empty neighbour
    frontier: BTreeSet<Position>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: Table::fill_with(None),
            is_empty: true,
            frontier: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// The tile at `pos`, None for an empty square or a position out of the board
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.cells.get(pos)?.as_ref()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    pub fn occupied(&self) -> impl Iterator<Item=(Position, &Tile)> {
        self.cells.rows().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter_map(move |(col, cell)| {
                cell.as_ref().map(|tile| (Position { row, col }, tile))
            })
        })
    }

    /// Writes `tiles` from `placement`, skipping squares that already hold a tile
    ///
    /// Must only be called after the placement has been accepted by a
    /// [`PlacementValidator`](crate::PlacementValidator).
    pub fn place(&mut self, tiles: &[Tile], placement: Placement) {
        debug_assert!(placement.fits(tiles.len()), "placing {} tiles at {} does not fit", tiles.len(), placement);

        let mut placed = vec![];
        for (i, tile) in tiles.iter().enumerate() {
            let pos = placement.nth(i);
            match self.cells.get_mut(pos) {
                // an occupied square is an overlap with a matching letter
                Some(cell) => if cell.is_none() {
                    *cell = Some(*tile);
                    placed.push(pos);
                },
                None => break, // out of board
            }
        }
        self.is_empty = false;

        self.extend_frontier(&placed);
    }

    fn extend_frontier(&mut self, placed: &[Position]) {
        for &pos in placed {
            self.frontier.insert(pos);
            for neighbour in neighbours(pos) {
                if self.is_occupied(neighbour) {
                    self.frontier.insert(neighbour);
                }
            }
        }
        let cells = &self.cells;
        self.frontier.retain(|&pos| {
            neighbours(pos).iter().any(|&n| matches!(cells.get(n), Some(None)))
        });
    }

    /// Occupied squares that have an empty neighbour along `dir`
    ///
    /// A word along `dir` that places at least one tile and goes through an
    /// occupied square always goes through one of these.
    pub fn frontier(&self, dir: Direction) -> impl Iterator<Item=Position> + '_ {
        self.frontier.iter().cloned().filter(move |&pos| {
            let line = Placement(pos, dir);
            [line.back().0, line.next().0].iter().any(|&n| matches!(self.cells.get(n), Some(None)))
        })
    }

    /// Parse a board from 15 lines of 15 squares
    ///
    /// Letters are tiles (valued with `scoring`), `.`, `_` and spaces are empty squares.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], scoring: &impl LetterScoring) -> Result<Grid, Error> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut grid = Grid::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(Error::InvalidRowLength(line.to_owned(), len));
            }
            for (col, square) in line.chars().enumerate() {
                match square {
                    '.' | '_' | ' ' => (),
                    c => {
                        let letter = Letter::from_char(c).ok_or(Error::InvalidSquare { square: c, row, col })?;
                        let tile = Tile { letter, value: scoring.score_for(letter) };
                        grid.cells.set(Position { row, col }, Some(tile));
                        grid.is_empty = false;
                    }
                }
            }
        }
        let occupied = grid.occupied().map(|(pos, _)| pos).collect::<Vec<_>>();
        grid.extend_frontier(&occupied);
        Ok(grid)
    }

    /// The board as 15 strings, `.` for empty squares
    pub fn to_rows(&self) -> Vec<String> {
        self.cells.rows()
            .map(|line| line.iter().map(|cell| match cell {
                Some(tile) => tile.letter.as_char(),
                None => '.',
            }).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for (row, line) in self.to_rows().iter().enumerate() {
            write!(f, "{:>3}", row)?;
            for square in line.chars() {
                write!(f, "{:>3}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn neighbours(pos: Position) -> [Position; 4] {
    let h = Placement(pos, Direction::Horizontal);
    let v = Placement(pos, Direction::Vertical);
    [h.back().0, h.next().0, v.back().0, v.next().0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score_rules::EnglishScrabbleScoring;
    use crate::testing::{board, tiles};

    #[test]
    fn starts_empty() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.occupied().count(), 0);
        assert_eq!(grid.frontier(Direction::Horizontal).count(), 0);
    }

    #[test]
    fn place_writes_only_empty_squares() {
        let mut grid = Grid::new();
        grid.place(&tiles("CAT"), Placement::new(7, 7, Direction::Horizontal));
        assert!(!grid.is_empty());
        assert_eq!(grid.get(Position::new(7, 8)).map(|t| t.letter), Some(Letter(b'A')));

        // the overlapping C keeps the tile already there
        let mut other_c = tiles("CAB");
        other_c[0].value = 99;
        grid.place(&other_c, Placement::new(7, 7, Direction::Vertical));
        assert_eq!(grid.get(Position::new(7, 7)).map(|t| t.value), Some(3));
        assert_eq!(grid.get(Position::new(9, 7)).map(|t| t.letter), Some(Letter(b'B')));
        assert_eq!(grid.occupied().count(), 5);
    }

    #[test]
    fn frontier_by_direction() {
        let mut grid = Grid::new();
        grid.place(&tiles("CAT"), Placement::new(7, 7, Direction::Horizontal));

        let horizontal: Vec<_> = grid.frontier(Direction::Horizontal).collect();
        assert_eq!(horizontal, vec![Position::new(7, 7), Position::new(7, 9)]);

        let vertical: Vec<_> = grid.frontier(Direction::Vertical).collect();
        assert_eq!(vertical, vec![Position::new(7, 7), Position::new(7, 8), Position::new(7, 9)]);
    }

    #[test]
    fn surrounded_squares_leave_the_frontier() {
        let grid = board(&[
            (6, 7, Direction::Horizontal, "A"),
            (7, 6, Direction::Horizontal, "ABA"),
            (8, 7, Direction::Horizontal, "A"),
        ]);
        let all: Vec<_> = grid.frontier(Direction::Horizontal)
            .chain(grid.frontier(Direction::Vertical))
            .collect();
        assert!(!all.contains(&crate::CENTER));
        assert!(all.contains(&Position::new(7, 6)));
    }

    #[test]
    fn rows_round_trip() {
        let mut rows = vec![".".repeat(15); 15];
        rows[7] = ".......cat.....".to_owned();
        rows[8] = ".........o.....".to_owned();
        let grid = Grid::from_rows(&rows, &EnglishScrabbleScoring).unwrap();

        assert!(!grid.is_empty());
        assert_eq!(grid.get(Position::new(7, 7)), Some(&Tile::new(b'C', 3)));
        assert_eq!(grid.to_rows()[7], ".......CAT.....");
        assert_eq!(grid.to_rows()[8], ".........O.....");
        assert_eq!(grid.frontier(Direction::Vertical).count(), 4);
    }

    #[test]
    fn rows_errors() {
        let rows = vec![".".repeat(15); 14];
        assert!(matches!(Grid::from_rows(&rows, &EnglishScrabbleScoring), Err(Error::InvalidRowCount(14))));

        let mut rows = vec![".".repeat(15); 15];
        rows[3] = "...".to_owned();
        assert!(matches!(Grid::from_rows(&rows, &EnglishScrabbleScoring), Err(Error::InvalidRowLength(_, 3))));

        let mut rows = vec![".".repeat(15); 15];
        rows[2] = "..#............".to_owned();
        assert!(matches!(
            Grid::from_rows(&rows, &EnglishScrabbleScoring),
            Err(Error::InvalidSquare { square: '#', row: 2, col: 2 }),
        ));
    }
}
