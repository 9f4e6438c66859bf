use rand::{rngs::StdRng, Rng, SeedableRng};
use tinyvec::ArrayVec;

use super::score_rules::{EnglishScrabbleScoring, LetterScoring};
use super::{Letter, Tile, RACK_CAPACITY};

/// Where racks get their tiles from
pub trait TileSupply {
    /// One tile, None once the supply is exhausted
    fn draw_tile(&mut self) -> Option<Tile>;
    fn return_tile(&mut self, tile: Tile);
    fn remaining(&self) -> usize;
}

/// How many tiles of each letter a standard english set holds, without blanks
const ENGLISH_DISTRIBUTION: [(u8, usize); 26] = [
    (b'A', 9), (b'B', 2), (b'C', 2), (b'D', 4), (b'E', 12), (b'F', 2), (b'G', 3),
    (b'H', 2), (b'I', 9), (b'J', 1), (b'K', 1), (b'L', 4), (b'M', 2), (b'N', 6),
    (b'O', 8), (b'P', 2), (b'Q', 1), (b'R', 6), (b'S', 4), (b'T', 6), (b'U', 4),
    (b'V', 2), (b'W', 2), (b'X', 1), (b'Y', 2), (b'Z', 1),
];

/// The bag tiles are drawn from at random
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: StdRng,
}

impl TileBag {
    /// The 98 english tiles, drawn in an order fixed by `seed`
    pub fn english(seed: u64) -> Self {
        let tiles = ENGLISH_DISTRIBUTION
            .iter()
            .flat_map(|&(l, n)| {
                let letter = Letter(l);
                std::iter::repeat(Tile { letter, value: EnglishScrabbleScoring.score_for(letter) }).take(n)
            })
            .collect();
        Self::from_tiles(tiles, seed)
    }

    pub fn from_tiles(tiles: Vec<Tile>, seed: u64) -> Self {
        Self {
            tiles,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take out one tile of that letter, for tiles known to be already in play
    pub fn take_letter(&mut self, letter: Letter) -> Option<Tile> {
        let i = self.tiles.iter().position(|t| t.letter == letter)?;
        Some(self.tiles.swap_remove(i))
    }
}

impl TileSupply for TileBag {
    fn draw_tile(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None
        }
        let i = self.rng.gen_range(0..self.tiles.len());
        Some(self.tiles.swap_remove(i))
    }

    fn return_tile(&mut self, tile: Tile) {
        self.tiles.push(tile)
    }

    fn remaining(&self) -> usize {
        self.tiles.len()
    }
}

/// The tiles a player holds, at most seven, in no particular order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rack(ArrayVec<[Tile; RACK_CAPACITY]>);

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile, given back when the rack is full
    pub fn try_push(&mut self, tile: Tile) -> Option<Tile> {
        if self.is_full() {
            return Some(tile)
        }
        self.0.push(tile);
        None
    }

    /// Take out one tile with that letter
    pub fn remove_letter(&mut self, letter: Letter) -> Option<Tile> {
        let i = self.0.iter().position(|t| t.letter == letter)?;
        Some(self.0.swap_remove(i))
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.iter().any(|t| t.letter == letter)
    }

    /// The letters held, as uppercase text
    pub fn letters(&self) -> String {
        self.0.iter().map(|t| t.letter.as_char()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= RACK_CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item=&Tile> {
        self.0.iter()
    }

    /// Draw from `supply` until the rack is full or the supply is exhausted,
    /// returns how many tiles were drawn
    pub fn refill(&mut self, supply: &mut impl TileSupply) -> usize {
        let mut drawn = 0;
        while !self.is_full() {
            match supply.draw_tile() {
                Some(tile) => {
                    self.0.push(tile);
                    drawn += 1;
                },
                None => break,
            }
        }
        drawn
    }

    /// Empty the rack
    pub fn take_all(&mut self) -> Vec<Tile> {
        self.0.drain(..).collect()
    }
}

impl std::iter::FromIterator<Tile> for Rack {
    /// Keeps the first seven tiles
    fn from_iter<I: IntoIterator<Item=Tile>>(iter: I) -> Self {
        let mut rack = Rack::new();
        for tile in iter.into_iter().take(RACK_CAPACITY) {
            rack.0.push(tile);
        }
        rack
    }
}
