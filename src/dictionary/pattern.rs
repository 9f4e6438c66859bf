
use fst::Automaton;

/// The pattern byte that matches any letter
pub const WILDCARD: u8 = b'.';

/// Matches the words of the same length as `pattern`, letter by letter
pub struct PatternMatcher<'a> {
    pattern: &'a [u8],
}

impl<'a> PatternMatcher<'a> {
    pub fn new(pattern: &'a [u8]) -> Self {
        Self { pattern }
    }
}

impl<'a> Automaton for PatternMatcher<'a> {
    /// How many letters have been matched, None once the pattern is broken
    type State = Option<usize>;

    fn start(&self) -> Self::State {
        Some(0)
    }

    fn is_match(&self, state: &Self::State) -> bool {
        *state == Some(self.pattern.len())
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        state.and_then(|i| match self.pattern.get(i) {
            Some(&WILDCARD) => Some(i + 1),
            Some(&l) if l == byte => Some(i + 1),
            _ => None,
        })
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }
}

#[test]
fn test() {
    use fst::{IntoStreamer, Set, Streamer};

    let dict = Set::from_iter(vec!["BAT", "BATS", "CAT", "COT", "CUT"]).unwrap();

    let mut matches = dict.search(PatternMatcher::new(b"C.T")).into_stream();
    let mut acc = vec![];
    while let Some(w) = matches.next() {
        acc.push(std::str::from_utf8(w).unwrap().to_string());
    }
    assert_eq!(acc, vec!["CAT", "COT", "CUT"]);

    let mut matches = dict.search(PatternMatcher::new(b"...")).into_stream();
    let mut n = 0;
    while matches.next().is_some() {
        n += 1;
    }
    assert_eq!(n, 4);
}
