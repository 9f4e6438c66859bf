use crate::score_rules::{EnglishScrabbleScoring, LetterScoring};
use crate::{Dictionary, Direction, Grid, Letter, Placement, Tile};

pub const WORDS: &[&str] = &[
    "at", "be", "cab", "cat", "cats", "act", "ta", "tab", "bat", "bats",
    "scat", "taco", "coat", "oat", "oats", "to", "so", "at", "as", "is",
    "it", "its", "sit", "tic", "arc", "car", "cart", "tar", "rat", "art",
    "abs", "aba", "za", "retains", "stearin", "ab",
];

pub fn dictionary() -> Dictionary {
    Dictionary::from_words(WORDS.iter().cloned()).unwrap()
}

/// English valued tiles spelling `word`
pub fn tiles(word: &str) -> Vec<Tile> {
    word.bytes()
        .map(|b| {
            let letter = Letter::new(b);
            Tile { letter, value: EnglishScrabbleScoring.score_for(letter) }
        })
        .collect()
}

/// A grid with `words` laid out, without any check
pub fn board(words: &[(usize, usize, Direction, &str)]) -> Grid {
    let mut grid = Grid::new();
    for &(row, col, dir, word) in words {
        grid.place(&tiles(word), Placement::new(row, col, dir));
    }
    grid
}
