
use super::{Letter, Tile, Placement, Position, BOARD_SIZE, RACK_CAPACITY, BINGO_BONUS};

/// Rules that infuence the score
#[derive(Debug, Clone)]
pub struct ScoreRules<Bonuses: BoardBonus> {
    pub bonuses: Bonuses,
    /// The amount of bonus points in case of bingo/scrabble (aka all seven letters of the rack are played)
    pub bingo_bonus: u32,
}

impl ScoreRules<ScrabbleBonus> {
    pub fn standard() -> Self {
        Self {
            bonuses: ScrabbleBonus,
            bingo_bonus: BINGO_BONUS,
        }
    }
}

impl<Bonuses: BoardBonus> ScoreRules<Bonuses> {
    /// Score `tiles` laid out from `placement`
    ///
    /// Every covered square applies its letter bonus to the tile on it, and the
    /// product of all covered word bonuses multiplies the sum once. Using a whole
    /// rack in one word adds the bingo bonus.
    pub fn score(&self, tiles: &[Tile], placement: Placement) -> u32 {
        self.word_score(tiles, placement) + self.bingo(tiles.len())
    }

    /// The score of the word alone, without bingo bonus
    pub fn word_score(&self, tiles: &[Tile], placement: Placement) -> u32 {
        let mut letter_sum = 0;
        let mut word_multiplier = 1;

        for (i, tile) in tiles.iter().enumerate() {
            let bonus = self.bonuses.bonus_at(placement.nth(i));
            letter_sum += tile.value * bonus.letter;
            word_multiplier *= bonus.word;
        }

        letter_sum * word_multiplier
    }

    /// The bonus for laying `n_placed` tiles from the rack in one move
    pub fn bingo(&self, n_placed: usize) -> u32 {
        if n_placed == RACK_CAPACITY { self.bingo_bonus } else { 0 }
    }
}

/// Point value of each letter, used when tiles are created
pub trait LetterScoring: Sync {
    fn score_for(&self, letter: Letter) -> u32;
}

pub trait BoardBonus: Sync {
    fn bonus_at(&self, position: Position) -> Bonus;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bonus {
    pub letter: u32,
    pub word: u32,
}

#[derive(Debug, Copy, Clone)]
pub struct EnglishScrabbleScoring;
impl LetterScoring for EnglishScrabbleScoring {
    fn score_for(&self, letter: Letter) -> u32 {
        match letter.0 {
            b'A' => 1,
            b'B' => 3,
            b'C' => 3,
            b'D' => 2,
            b'E' => 1,
            b'F' => 4,
            b'G' => 2,
            b'H' => 4,
            b'I' => 1,
            b'J' => 8,
            b'K' => 5,
            b'L' => 1,
            b'M' => 3,
            b'N' => 1,
            b'O' => 1,
            b'P' => 3,
            b'Q' => 10,
            b'R' => 1,
            b'S' => 1,
            b'T' => 1,
            b'U' => 1,
            b'V' => 4,
            b'W' => 4,
            b'X' => 8,
            b'Y' => 4,
            b'Z' => 10,
            l => {
                log::warn!("unrecognized letter for score {}", l);
                0
            },
        }
    }
}

/// The standard 15x15 layout
#[derive(Debug, Copy, Clone)]
pub struct ScrabbleBonus;
impl BoardBonus for ScrabbleBonus {
    fn bonus_at(&self, position: Position) -> Bonus {
        let Position { row, col } = position;

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            log::error!("index for bonus is out of board");
            return Bonus { letter: 1, word: 1 };
        }

        assert_eq!(BOARD_SIZE, 15);

        fn fold_half(a: usize) -> usize {
            if a >= 7 {
                a - 7
            } else {
                7 - a
            }
        }

        // use the fact the bonus are symetrical from center
        let row = fold_half(row);
        let col = fold_half(col);

        match (row, col) {
            | (7, 0) | (0, 7)
            | (7, 7) => Bonus { letter: 1, word: 3 },

            | (1, 1)
            | (4, 0) | (0, 4)
            | (5, 1) | (1, 5)
            | (7, 4) | (4, 7) => Bonus { letter: 2, word: 1 },

            | (2, 2)
            | (6, 2) | (2, 6) => Bonus { letter: 3, word: 1 },

            // the diagonals, center included
            (row, col) if row == col => Bonus { letter: 1, word: 2 },

            _ => Bonus { letter: 1, word: 1 }
        }
    }
}
