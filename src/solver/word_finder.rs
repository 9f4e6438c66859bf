use std::fmt;

use fst::{Automaton, IntoStreamer, Set, Streamer};

use super::super::{Rack, RACK_CAPACITY};

/// Counts of the letters left to spell a word with
#[derive(Clone, PartialEq, Eq)]
pub struct TrayRemaining {
    letters: [u8; 26],
    /// The total number of remaining letters
    n_total: u32,
}

impl TrayRemaining {
    pub fn new(letters: [u8; 26]) -> TrayRemaining {
        let n_total = letters.iter().map(|&i| i as u32).sum::<u32>();
        TrayRemaining { letters, n_total }
    }

    pub fn from_rack(rack: &Rack) -> TrayRemaining {
        let mut letters = [0; 26];
        for tile in rack.iter() {
            if let Some(i) = index(tile.letter.0) {
                letters[i] += 1;
            }
        }
        TrayRemaining::new(letters)
    }

    pub fn len(&self) -> usize {
        self.n_total as usize
    }

    pub fn is_empty(&self) -> bool {
        self.n_total == 0
    }

    pub fn remove(&self, letter: u8) -> Option<TrayRemaining> {
        let i = index(letter)?;
        if self.letters[i] > 0 {
            let mut tmp = self.clone();
            tmp.letters[i] -= 1;
            tmp.n_total -= 1;
            Some(tmp)
        } else {
            None
        }
    }
}

fn index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

impl fmt::Debug for TrayRemaining {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, &n) in self.letters.iter().enumerate() {
            for _ in 0..n {
                write!(f, "{}", (b'A' + i as u8) as char)?;
            }
        }
        write!(f, "[{} letters]", self.n_total)
    }
}

/// Accepts the words spelled with the tray letters, each used at most once
#[derive(Debug, Clone)]
pub struct RackAutomaton {
    pub tray: TrayRemaining,
    pub min_len: usize,
    pub max_len: usize,
}

#[derive(Debug, Clone)]
pub struct RackAutomatonState {
    /// How many letters have been spelled
    pub len: usize,
    /// What is left in the tray
    pub tray: TrayRemaining,
}

impl Automaton for RackAutomaton {
    type State = Option<RackAutomatonState>;

    fn start(&self) -> Self::State {
        Some(RackAutomatonState {
            len: 0,
            tray: self.tray.clone(),
        })
    }

    fn is_match(&self, state: &Self::State) -> bool {
        match state {
            Some(state) => state.len >= self.min_len && state.len <= self.max_len,
            None => false,
        }
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        state.as_ref().and_then(|state| {
            if state.len >= self.max_len {
                return None
            }
            // consume the letter from the tray
            state.tray.remove(byte).map(|tray| RackAutomatonState {
                len: state.len + 1,
                tray,
            })
        })
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }
}

/// Every word of `dictionary` that the rack can spell, at least two letters long,
/// in lexicographic order
pub fn rack_words(dictionary: &Set<impl AsRef<[u8]>>, rack: &Rack) -> Vec<String> {
    let automaton = RackAutomaton {
        tray: TrayRemaining::from_rack(rack),
        min_len: 2,
        max_len: RACK_CAPACITY,
    };

    let mut acc = vec![];
    let mut matches = dictionary.search(automaton).into_stream();
    while let Some(word) = matches.next() {
        acc.push(String::from_utf8_lossy(word).into_owned());
    }
    acc
}

#[test]
fn test() {
    use crate::testing::tiles;

    let dict = Set::from_iter(vec!["A", "AT", "CAT", "CATS", "TACT", "ZA"]).unwrap();
    let rack: Rack = tiles("TCAS").into_iter().collect();

    assert_eq!(rack_words(&dict, &rack), vec!["AT", "CAT", "CATS"]);

    let tray = TrayRemaining::from_rack(&rack);
    assert_eq!(tray.len(), 4);
    assert_eq!(format!("{:?}", tray), "ACST[4 letters]");
    assert!(tray.remove(b'Z').is_none());
    assert_eq!(tray.remove(b'T').map(|t| t.len()), Some(3));
}
