
use std::convert::TryInto;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use scrabble_engine::score_rules::{EnglishScrabbleScoring, LetterScoring, ScrabbleBonus};
use scrabble_engine::{
    AnchorStrategy,
    Dictionary,
    Grid,
    Letter,
    MoveSearch,
    PlacementValidator,
    Player,
    ScoreRules,
    Tile,
    TileBag,
    TurnOutcome,
    RACK_CAPACITY,
};

#[derive(Debug)]
enum FileOrString {
    File(PathBuf),
    String(String),
}

impl FileOrString {
    pub fn read_to_string(self) -> std::io::Result<String> {
        match self {
            Self::String(s) => Ok(s),
            Self::File(f) => std::fs::read_to_string(f),
        }
    }
}

impl<'de> serde::Deserialize<'de> for FileOrString {
    fn deserialize<D>(deserializer: D) -> Result<FileOrString, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Visitor, MapAccess, Error};
        use std::fmt;

        #[derive(serde::Deserialize)]
        #[serde(field_identifier, rename_all = "snake_case")]
        enum FileKey {
            File,
        }

        struct FileOrStringVisitor;

        impl<'de> Visitor<'de> for FileOrStringVisitor {
            type Value = FileOrString;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a board string or a map with a `file` key")
            }

            fn visit_map<V>(self, mut map: V) -> Result<FileOrString, V::Error>
            where
                V: MapAccess<'de>,
            {
                let _: FileKey = map.next_key()?.ok_or_else(|| V::Error::missing_field("file"))?;
                let file = map.next_value()?;
                Ok(FileOrString::File(file))
            }

            fn visit_str<E>(self, v: &str) -> Result<FileOrString, E> {
                Ok(FileOrString::String(v.to_owned()))
            }
            fn visit_string<E>(self, v: String) -> Result<FileOrString, E> {
                Ok(FileOrString::String(v))
            }
        }

        deserializer.deserialize_any(FileOrStringVisitor)
    }
}

#[derive(Debug, serde::Deserialize)]
struct Settings {
    /// The dictionary of words that are allowed to be played.
    ///
    /// Either a `.txt` file with one word per line, or a `.fst` file generated with `make_fst`
    dictionary: PathBuf,

    /// The board as a string or the file containing it, an empty board if not present
    board: Option<FileOrString>,

    /// The letters of the rack
    rack: String,

    /// The number of top result shown, not present means all results are shown
    n_shown: Option<usize>,

    #[serde(default)]
    anchor_strategy: AnchorStrategy,

    #[serde(default = "fifty")]
    bingo_bonus: u32,

    /// Seed of the bag the rack is refilled from
    #[serde(default)]
    seed: u64,
}

fn fifty() -> u32 { 50 }

#[derive(Debug, StructOpt)]
#[structopt(name = "scrabble_one", about = "Find the best moves for a rack on a scrabble board, and play the best one")]
struct Opt {
    /// The config file
    #[structopt(short = "c", long = "config")]
    config: Option<String>,

    /// The dictionary of words that are allowed to be played.
    ///
    /// Either a `.txt` file with one word per line, or a `.fst` file generated with `make_fst`
    #[structopt(short = "d", long = "dictionary")]
    dict: Option<String>,

    /// The board, 15 lines of 15 squares. Letters are tiles,
    /// dots, spaces and underscores are empty squares
    #[structopt(short = "b", long = "board")]
    board_file: Option<String>,

    /// The rack, a string of at most seven letters
    #[structopt(short = "r", long = "rack")]
    rack: Option<String>,

    /// The number of top result shown, not present means all results are shown
    #[structopt(short = "n", long = "number-shown")]
    n_shown: Option<usize>,

    /// Seed of the bag the rack is refilled from
    #[structopt(short = "s", long = "seed")]
    seed: Option<u64>,
}

fn load_config(opt: Opt) -> Result<Settings, config::ConfigError> {
    let mut s = config::Config::new();

    if let Some(f) = opt.config {
        s.merge(config::File::with_name(&f))?;
    }

    s.merge(config::Environment::new())?;

    if let Some(d) = opt.dict {
        s.set("dictionary", d)?;
    }
    if let Some(b) = opt.board_file {
        s.set("board.file", b)?;
    }
    if let Some(r) = opt.rack {
        s.set("rack", r)?;
    }
    if let Some(n) = opt.n_shown {
        s.set::<i64>("n_shown", n.try_into().unwrap_or(i64::MAX))?;
    }
    if let Some(seed) = opt.seed {
        // the config values are signed
        s.set::<i64>("seed", seed as i64)?;
    }

    s.try_into()
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let start = Instant::now();
    let dictionary = match path.extension().and_then(|s| s.to_str()) {
        Some("fst") => {
            let data = std::fs::read(path).context("reading the words fst file")?;
            Dictionary::from_fst(data).context("converting fst file in set")?
        },
        Some("txt") => {
            let list = std::fs::read_to_string(path).context("reading the words list file")?;
            Dictionary::from_words(list.lines())?
        },
        _ => bail!("dictionary file is neither .txt or .fst: {}", path.display()),
    };
    log::info!("dictionary of {} words loaded in {:?}", dictionary.len(), Instant::now() - start);
    Ok(dictionary)
}

fn parse_rack(letters: &str) -> Vec<Tile> {
    let mut tiles = vec![];
    for c in letters.chars() {
        match Letter::from_char(c) {
            Some(letter) => tiles.push(Tile { letter, value: EnglishScrabbleScoring.score_for(letter) }),
            None => log::warn!("a character in the given rack is not a letter: {:?}", c),
        }
    }
    if tiles.len() > RACK_CAPACITY {
        log::warn!("the rack holds {} letters, only the first {} are kept", tiles.len(), RACK_CAPACITY);
        tiles.truncate(RACK_CAPACITY);
    }
    tiles
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::from_env().init()?;

    let opt = Opt::from_args();

    let conf = load_config(opt).context("loading the settings")?;

    let dictionary = load_dictionary(&conf.dictionary)?;

    let start = Instant::now();
    let mut grid = match conf.board {
        Some(board) => {
            let board = board.read_to_string().context("reading the board")?;
            let rows = board.lines().collect::<Vec<_>>();
            Grid::from_rows(&rows, &EnglishScrabbleScoring)?
        },
        None => Grid::new(),
    };
    log::info!("board loaded in {:?}", Instant::now() - start);

    // the bag holds what is neither on the board nor in the rack
    let mut bag = TileBag::english(conf.seed);
    let mut player = Player::new("scrabble_one");
    for tile in parse_rack(&conf.rack) {
        if bag.take_letter(tile.letter).is_none() {
            log::warn!("the rack holds more {} than the bag had", tile.letter.as_char());
        }
        if player.rack.try_push(tile).is_some() {
            log::warn!("the rack is full, {} left out", tile.letter.as_char());
        }
    }
    for (pos, tile) in grid.occupied() {
        if bag.take_letter(tile.letter).is_none() {
            log::warn!("the {} at ({},{}) is one more than the bag had", tile.letter.as_char(), pos.row, pos.col);
        }
    }

    let rules = ScoreRules {
        bonuses: ScrabbleBonus,
        bingo_bonus: conf.bingo_bonus,
    };
    let mut validator = PlacementValidator::new(&dictionary, rules);
    let search = MoveSearch::new(conf.anchor_strategy);

    let start = Instant::now();
    let candidates = search.find_candidates(&validator, &grid, &player.rack);
    log::info!("moves evaluated in {:?} ({} possible moves)", Instant::now() - start, candidates.len());

    let n_shown = conf.n_shown.unwrap_or(candidates.len());
    let mut last_score = None;
    for candidate in candidates.iter().take(n_shown) {
        if last_score == Some(candidate.score) {
            print!("{:>3}  ", " ")
        } else {
            last_score = Some(candidate.score);
            print!("{:>3}: ", candidate.score)
        }
        println!("{:<12} {}", candidate.placement, candidate.word);
    }

    match search.execute_best_move(&mut validator, &mut grid, &mut player, &mut bag) {
        TurnOutcome::Placed(committed) => {
            println!("\nplayed {} at {} for {} points", committed.word, committed.placement, committed.points);
        },
        TurnOutcome::Exchanged { returned, drawn } => {
            println!("\nno word can be placed, {} tiles exchanged for {}", returned, drawn);
        },
        TurnOutcome::Passed => println!("\nthe rack is empty, nothing to play"),
    }
    println!("rack: {}\n\n{}", player.rack.letters(), grid);

    Ok(())
}
