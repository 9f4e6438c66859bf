use criterion::{criterion_group, criterion_main, Criterion};

use scrabble_engine::score_rules::{EnglishScrabbleScoring, LetterScoring};
use scrabble_engine::{
    AnchorStrategy, Dictionary, Grid, Letter, MoveSearch, PlacementValidator, Rack, ScoreRules, Tile,
};

const WORDS: &[&str] = &[
    "AT", "AS", "AN", "IN", "IS", "IT", "TO", "SO", "NO", "ON", "OR", "RE", "ER", "EN", "NE", "TA", "AR",
    "ATE", "EAT", "TEA", "TAN", "ANT", "NET", "TEN", "SET", "SAT", "RAT", "TAR", "ART", "ARE", "EAR",
    "ERA", "SEA", "TIN", "NIT", "SIT", "ITS", "TIS", "SIN", "INS", "ION", "ONE", "EON", "NOR", "ORE",
    "ROE", "TOE", "NOT", "TON", "RIOT", "TRIO", "IRON", "NOIR", "REST", "STAR", "RATS", "ARTS", "TARS",
    "SEAT", "EATS", "TEAS", "EAST", "SATE", "RATE", "TEAR", "TARE", "NEAT", "ANTE", "ETNA", "STONE",
    "NOTES", "ONSET", "TONES", "STERN", "TERNS", "RENTS", "INERT", "INTER", "NITER", "RAINS", "SNARE",
    "EARNS", "NEARS", "STARE", "TEARS", "RATES", "ASTER", "SENIOR", "NOSIER", "IRONS", "STAIN", "SATIN",
    "SAINT", "RETAINS", "STEARIN", "NASTIER", "RETINAS", "RETSINA", "ANESTRI", "RATINE", "RETINA",
    "TRAINS", "STRAIN", "INSERT", "INTERS", "SINTER", "ESTRIN", "INERTS", "NITERS", "TONERS", "TENORS",
    "STONER", "ORATES", "OATERS", "ORNATE", "ATONE", "OATEN", "NOTARIES", "SENORITA", "ROSIN", "ORNATES",
];

const STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "......S........",
    "......T..R.....",
    "......O..A.....",
    ".....INERTS....",
    "......E..E.....",
    "......S..S.....",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn rack(letters: &str) -> Rack {
    letters.bytes()
        .map(|b| {
            let letter = Letter::new(b);
            Tile { letter, value: EnglishScrabbleScoring.score_for(letter) }
        })
        .collect()
}

fn bench_find_candidates(c: &mut Criterion, name: &str, strategy: AnchorStrategy, letters: &str) {
    let dictionary = Dictionary::from_words(WORDS.iter()).unwrap();
    let grid = Grid::from_rows(STATE, &EnglishScrabbleScoring).unwrap();
    let validator = PlacementValidator::new(&dictionary, ScoreRules::standard());
    let search = MoveSearch::new(strategy);
    let rack = rack(letters);

    c.bench_function(&format!("find_candidates.{}", name), |b| {
        b.iter(|| search.find_candidates(&validator, &grid, &rack))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_find_candidates(c, "frontier", AnchorStrategy::Frontier, "AEINRST");
    bench_find_candidates(c, "full_scan", AnchorStrategy::FullScan, "AEINRST");
    bench_find_candidates(c, "short_rack", AnchorStrategy::Frontier, "OTA");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(30);
    targets = criterion_benchmark
}
criterion_main!(benches);
