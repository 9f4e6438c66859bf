
pub mod error;
pub mod grid;
pub mod score_rules;
pub mod dictionary;
pub mod validator;
pub mod rack;
pub mod player;
pub mod solver;

#[cfg(test)]
mod testing;

use std::fmt;

pub const BOARD_SIZE: usize = 15;

/// The square every first move must cover
pub const CENTER: Position = Position { row: BOARD_SIZE / 2, col: BOARD_SIZE / 2 };

/// The maximum number of tiles a player holds
pub const RACK_CAPACITY: usize = 7;

/// The extra points for playing a whole rack in one word (aka bingo/scrabble)
pub const BINGO_BONUS: u32 = 50;

pub use error::Error;
pub use grid::Grid;
pub use score_rules::{BoardBonus, Bonus, LetterScoring, ScoreRules};
pub use dictionary::Dictionary;
pub use validator::{PlacementValidator, PlayedWords};
pub use rack::{Rack, TileBag, TileSupply};
pub use player::Player;
pub use solver::{AnchorStrategy, Candidate, CommittedMove, MoveSearch, TurnOutcome};

// letters are uppercase ascii bytes
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(pub u8);

impl Letter {
    pub fn new(byte: u8) -> Self {
        Letter(byte.to_ascii_uppercase())
    }

    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter::new(c as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
         write!(f, "{}", (self.0 as char).escape_default())
    }
}
impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
         write!(f, "{}", self)
    }
}

/// A letter and its point value
///
/// Tiles are created by the tile supply and then only move between a rack and the grid
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: Letter,
    pub value: u32,
}

impl Tile {
    pub fn new(letter: u8, value: u32) -> Self {
        Self { letter: Letter::new(letter), value }
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
         write!(f, "{}({})", self.letter, self.value)
    }
}

/// The text spelled by a sequence of tiles
pub fn tiles_to_word(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.letter.as_char()).collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn perp(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "→"),
            Self::Vertical => write!(f, "↓"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl std::ops::Index<Direction> for Position {
    type Output = usize;
    /// The coordinate that changes in that direction
    fn index(&self, dir: Direction) -> &Self::Output {
        match dir {
            Direction::Vertical => &self.row,
            Direction::Horizontal => &self.col,
        }
    }
}

impl std::ops::IndexMut<Direction> for Position {
    /// The coordinate that changes in that direction
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        match dir {
            Direction::Vertical => &mut self.row,
            Direction::Horizontal => &mut self.col,
        }
    }
}

/// A start square and the direction a word is read in
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement(pub Position, pub Direction);

impl Placement {
    pub fn new(row: usize, col: usize, dir: Direction) -> Self {
        Self(Position { row, col }, dir)
    }

    pub fn next(mut self) -> Self {
        self.0[self.1] = self.0[self.1].saturating_add(1);
        self
    }

    // wraps below zero, which lands off the board
    pub fn back(mut self) -> Self {
        self.0[self.1] = self.0[self.1].wrapping_sub(1);
        self
    }

    /// A placement at the same position, but different direction
    pub fn perp(self) -> Self {
        Self(self.0, self.1.perp())
    }

    /// The position `i` squares further along the line
    pub fn nth(self, i: usize) -> Position {
        let mut pos = self.0;
        pos[self.1] = pos[self.1].saturating_add(i);
        pos
    }

    /// Moves the start `i` squares back along the line, None if it leaves the board
    pub fn moved_back(mut self, i: usize) -> Option<Self> {
        self.0[self.1] = self.0[self.1].checked_sub(i)?;
        Some(self)
    }

    /// Whether `len` squares starting here all lie on the board
    pub fn fits(self, len: usize) -> bool {
        len > 0 && self.0.is_on_board() && self.0[self.1] + len <= BOARD_SIZE
    }

    /// Whether the `len` squares starting here contain `pos`
    pub fn covers(self, len: usize, pos: Position) -> bool {
        let dir = self.1;
        pos[dir.perp()] == self.0[dir.perp()]
            && pos[dir] >= self.0[dir]
            && pos[dir] < self.0[dir] + len
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{}) {}", self.0.row, self.0.col, self.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    squares: Vec<Vec<T>>
}

impl<T> Table<T> {
    pub fn fill_with(el: T) -> Self where T: Clone {
        Self {
            squares: vec![vec![el; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.squares.get(pos.row)?.get(pos.col)
    }
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.squares.get_mut(pos.row)?.get_mut(pos.col)
    }
    pub fn set(&mut self, pos: Position, val: T) {
        self.squares[pos.row][pos.col] = val
    }

    pub fn rows(&self) -> impl Iterator<Item=&[T]> {
        self.squares.iter().map(|row| &row[..])
    }
}


#[test]
fn test_placement_walk() {
    let p = Placement::new(7, 3, Direction::Horizontal);

    assert_eq!(p.next().0, Position::new(7, 4));
    assert_eq!(p.back().0, Position::new(7, 2));
    assert_eq!(p.nth(4), Position::new(7, 7));
    assert_eq!(p.perp().nth(4), Position::new(11, 3));

    assert_eq!(p.moved_back(3), Some(Placement::new(7, 0, Direction::Horizontal)));
    assert_eq!(p.moved_back(4), None);

    // going back from the edge leaves the board
    assert!(!Placement::new(0, 0, Direction::Vertical).back().0.is_on_board());
}

#[test]
fn test_placement_bounds() {
    let p = Placement::new(7, 8, Direction::Horizontal);
    assert!(p.fits(7));
    assert!(!p.fits(8));
    assert!(!p.fits(0));

    assert!(p.covers(3, Position::new(7, 10)));
    assert!(!p.covers(3, Position::new(7, 11)));
    assert!(!p.covers(3, Position::new(8, 9)));

    let v = Placement::new(1, 7, Direction::Vertical);
    assert!(v.fits(14));
    assert!(!v.fits(15));
    assert!(v.covers(7, CENTER));
}

#[test]
fn test_tiles_to_word() {
    let tiles = [Tile::new(b'c', 3), Tile::new(b'A', 1), Tile::new(b't', 1)];
    assert_eq!(tiles_to_word(&tiles), "CAT");
    assert_eq!(format!("{:?}", tiles[0]), "C(3)");
}
