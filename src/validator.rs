use std::collections::HashSet;
use std::fmt;

use super::{tiles_to_word, BoardBonus, Dictionary, Direction, Grid, Placement, Position, ScoreRules, Tile, CENTER};

/// The words already scored during the game
///
/// Keyed by the text of the word only: a word already scored is never scored
/// again, wherever it appears on the board.
#[derive(Debug, Clone, Default)]
pub struct PlayedWords(HashSet<String>);

impl PlayedWords {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
    /// Returns false if the word was already there
    pub fn insert(&mut self, word: String) -> bool {
        self.0.insert(word)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item=&str> {
        self.0.iter().map(|w| w.as_str())
    }
}

/// A complete word on the board that a placement creates or extends
#[derive(Debug, Clone, PartialEq)]
pub struct FormedWord {
    pub word: String,
    /// Where the first letter of the word is
    pub placement: Placement,
    /// Existing and new tiles, in reading order
    pub tiles: Vec<Tile>,
}

/// What a legal placement does to the board
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub words: Vec<FormedWord>,
    /// How many tiles land on empty squares
    pub n_placed: usize,
}

/// Why a placement is illegal
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Some square would be out of the board
    OutOfBoard,
    /// The first word does not cover the center
    OffCenter,
    /// A tile does not match the letter already on its square
    Conflict(Position),
    /// Every square is already occupied
    NothingPlaced,
    /// No existing tile is touched
    Detached,
    /// The main or a perpendicular word is not in the dictionary
    InvalidWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OutOfBoard => write!(f, "does not fit on the board"),
            Self::OffCenter => write!(f, "first word must cover the center"),
            Self::Conflict(pos) => write!(f, "conflicts with the tile at ({},{})", pos.row, pos.col),
            Self::NothingPlaced => write!(f, "places no new tile"),
            Self::Detached => write!(f, "is not attached to existing tiles"),
            Self::InvalidWord => write!(f, "forms a word not in the dictionary"),
        }
    }
}

/// Decides whether tiles can be laid on a grid, and scores the words they form
pub struct PlacementValidator<'d, Bonuses: BoardBonus> {
    dictionary: &'d Dictionary,
    rules: ScoreRules<Bonuses>,
    played_words: PlayedWords,
}

impl<'d, Bonuses: BoardBonus> PlacementValidator<'d, Bonuses> {
    pub fn new(dictionary: &'d Dictionary, rules: ScoreRules<Bonuses>) -> Self {
        Self {
            dictionary,
            rules,
            played_words: PlayedWords::new(),
        }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn rules(&self) -> &ScoreRules<Bonuses> {
        &self.rules
    }

    pub fn played_words(&self) -> &PlayedWords {
        &self.played_words
    }

    pub fn score(&self, tiles: &[Tile], placement: Placement) -> u32 {
        self.rules.score(tiles, placement)
    }

    /// Check the placement, and when legal add the score of every word it forms
    /// that has not been played yet to `score`
    pub fn can_place(&mut self, grid: &Grid, tiles: &[Tile], placement: Placement, score: &mut u32) -> bool {
        match self.check(grid, tiles, placement) {
            Ok(play) => {
                *score += self.points(&play);
                for word in play.words {
                    self.played_words.insert(word.word);
                }
                true
            },
            Err(rejection) => {
                log::trace!("{} at {} {}", tiles_to_word(tiles), placement, rejection);
                false
            },
        }
    }

    /// Same checks as [`can_place`](Self::can_place), without touching scores or played words
    pub fn can_place_without_scoring(&self, grid: &Grid, tiles: &[Tile], placement: Placement) -> bool {
        self.check(grid, tiles, placement).is_ok()
    }

    /// The points [`can_place`](Self::can_place) would award right now, None if illegal
    pub fn placement_score(&self, grid: &Grid, tiles: &[Tile], placement: Placement) -> Option<u32> {
        self.check(grid, tiles, placement).ok().map(|play| self.points(&play))
    }

    fn points(&self, play: &Play) -> u32 {
        let mut seen = HashSet::new();
        let words: u32 = play.words.iter()
            .filter(|w| !self.played_words.contains(&w.word) && seen.insert(w.word.as_str()))
            .map(|w| self.rules.word_score(&w.tiles, w.placement))
            .sum();
        words + self.rules.bingo(play.n_placed)
    }

    /// All the words the placement would form, main word first
    ///
    /// The main word is extended with the tiles already on the board before and
    /// after the placed span. A single letter main word is not a word when the
    /// tile forms a perpendicular word.
    pub fn check(&self, grid: &Grid, tiles: &[Tile], placement: Placement) -> Result<Play, Rejection> {
        if tiles.is_empty() {
            return Err(Rejection::NothingPlaced)
        }
        if !placement.fits(tiles.len()) {
            return Err(Rejection::OutOfBoard)
        }

        let first_move = grid.is_empty();
        if first_move && !placement.covers(tiles.len(), CENTER) {
            return Err(Rejection::OffCenter)
        }
        let mut attached = first_move;

        let (main_start, mut main_tiles) = run_before(grid, placement);
        if main_start != placement {
            attached = true;
        }

        let mut perp_words = vec![];
        let mut n_placed = 0;
        for (i, tile) in tiles.iter().enumerate() {
            let pos = placement.nth(i);
            match grid.get(pos) {
                Some(existing) => {
                    if existing.letter != tile.letter {
                        return Err(Rejection::Conflict(pos))
                    }
                    attached = true;
                    main_tiles.push(*existing);
                },
                None => {
                    n_placed += 1;
                    main_tiles.push(*tile);
                    if let Some(word) = perpendicular_word(grid, pos, placement.1.perp(), *tile) {
                        attached = true;
                        perp_words.push(word);
                    }
                },
            }
        }
        let after = run_after(grid, Placement(placement.nth(tiles.len() - 1), placement.1));
        if !after.is_empty() {
            attached = true;
        }
        main_tiles.extend(after);

        if n_placed == 0 {
            return Err(Rejection::NothingPlaced)
        }
        if !attached {
            return Err(Rejection::Detached)
        }

        let mut words = Vec::with_capacity(perp_words.len() + 1);
        if main_tiles.len() > 1 || perp_words.is_empty() {
            words.push(FormedWord {
                word: tiles_to_word(&main_tiles),
                placement: main_start,
                tiles: main_tiles,
            });
        }
        words.extend(perp_words);

        if words.iter().all(|w| self.dictionary.is_valid_word(&w.word)) {
            Ok(Play { words, n_placed })
        } else {
            Err(Rejection::InvalidWord)
        }
    }
}

/// The start of the run of occupied squares just before `placement`, and its tiles
fn run_before(grid: &Grid, placement: Placement) -> (Placement, Vec<Tile>) {
    let mut start = placement;
    let mut tiles = vec![];
    while let Some(tile) = grid.get(start.back().0) {
        tiles.push(*tile);
        start = start.back();
    }
    tiles.reverse();
    (start, tiles)
}

/// The tiles of the run of occupied squares just after `last`
fn run_after(grid: &Grid, last: Placement) -> Vec<Tile> {
    let mut head = last.next();
    let mut tiles = vec![];
    while let Some(tile) = grid.get(head.0) {
        tiles.push(*tile);
        head = head.next();
    }
    tiles
}

/// The word crossing `pos` along `dir` once `tile` is laid there, if it has neighbours
fn perpendicular_word(grid: &Grid, pos: Position, dir: Direction, tile: Tile) -> Option<FormedWord> {
    let line = Placement(pos, dir);
    let (start, mut tiles) = run_before(grid, line);
    let after = run_after(grid, line);
    if tiles.is_empty() && after.is_empty() {
        return None
    }
    tiles.push(tile);
    tiles.extend(after);
    Some(FormedWord {
        word: tiles_to_word(&tiles),
        placement: start,
        tiles,
    })
}
