
pub mod word_finder;
pub mod anchors;

use dashmap::DashMap;
use rayon::prelude::*;

pub use anchors::AnchorStrategy;

use super::{
    BoardBonus,
    Direction,
    Grid,
    Letter,
    Placement,
    PlacementValidator,
    Player,
    Rack,
    Tile,
    TileSupply,
    CENTER,
};

/// A legal move found by the search, with the points it would score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub placement: Placement,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommittedMove {
    /// The word as read from the placement, the rack letters and the board letters it goes through
    pub word: String,
    pub placement: Placement,
    pub points: u32,
    /// The rack tiles laid on the board
    pub tiles_used: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Placed(CommittedMove),
    /// No word could be placed, the whole rack went back to the supply
    Exchanged {
        returned: usize,
        drawn: usize,
    },
    /// The rack was empty, nothing happened
    Passed,
}

/// The automated player: finds every legal move of a rack and plays the best one
#[derive(Debug, Copy, Clone, Default)]
pub struct MoveSearch {
    pub strategy: AnchorStrategy,
}

impl MoveSearch {
    pub fn new(strategy: AnchorStrategy) -> Self {
        Self { strategy }
    }

    /// All the legal moves of `rack` on `grid`, best first
    ///
    /// Ties are broken by placement then word, so the order is deterministic.
    /// Nothing is mutated: the validator is only queried without scoring.
    pub fn find_candidates<Bonuses: BoardBonus>(
        &self,
        validator: &PlacementValidator<Bonuses>,
        grid: &Grid,
        rack: &Rack,
    ) -> Vec<Candidate> {
        let mut candidates = if grid.is_empty() {
            self.opening_candidates(validator, grid, rack)
        } else {
            self.anchored_candidates(validator, grid, rack)
        };

        candidates.par_sort_unstable_by(|a, b| {
            b.score.cmp(&a.score)
                .then_with(|| a.placement.cmp(&b.placement))
                .then_with(|| a.word.cmp(&b.word))
        });
        candidates
    }

    /// The words the rack spells, highest raw value first
    fn opening_words<Bonuses: BoardBonus>(&self, validator: &PlacementValidator<Bonuses>, rack: &Rack) -> Vec<String> {
        let mut words = word_finder::rack_words(validator.dictionary().set(), rack);
        // stable, so equal values stay in dictionary order
        words.sort_by_key(|word| std::cmp::Reverse(raw_value(rack, word)));
        words
    }

    fn opening_candidates<Bonuses: BoardBonus>(
        &self,
        validator: &PlacementValidator<Bonuses>,
        grid: &Grid,
        rack: &Rack,
    ) -> Vec<Candidate> {
        let mut candidates = vec![];
        for word in self.opening_words(validator, rack) {
            for &dir in &[Direction::Horizontal, Direction::Vertical] {
                let placement = Placement(CENTER, dir);
                let score = tiles_for(grid, rack, word.as_bytes(), placement)
                    .and_then(|tiles| validator.placement_score(grid, &tiles, placement));
                if let Some(score) = score {
                    candidates.push(Candidate { word: word.clone(), placement, score });
                }
            }
        }
        candidates
    }

    fn anchored_candidates<Bonuses: BoardBonus>(
        &self,
        validator: &PlacementValidator<Bonuses>,
        grid: &Grid,
        rack: &Rack,
    ) -> Vec<Candidate> {
        let words = word_finder::rack_words(validator.dictionary().set(), rack);

        let anchors = [Direction::Horizontal, Direction::Vertical]
            .iter()
            .flat_map(|&dir| self.strategy.anchors(grid, dir).into_iter().map(move |pos| Placement(pos, dir)))
            .collect::<Vec<_>>();

        log::debug!("{} rack words, {} anchors", words.len(), anchors.len());

        let found_moves: DashMap<(String, Placement), u32> = DashMap::new();

        anchors.into_par_iter().for_each(|anchor| {
            let anchor_letter = match grid.get(anchor.0) {
                Some(tile) => tile.letter.0,
                None => return,
            };
            for word in &words {
                // only the offsets that put the anchor letter on the anchor
                for (i, _) in word.bytes().enumerate().filter(|&(_, l)| l == anchor_letter) {
                    let placement = match anchor.moved_back(i) {
                        Some(placement) if placement.fits(word.len()) => placement,
                        _ => continue,
                    };
                    let tiles = match tiles_for(grid, rack, word.as_bytes(), placement) {
                        Some(tiles) => tiles,
                        None => continue,
                    };
                    if let Some(score) = validator.placement_score(grid, &tiles, placement) {
                        found_moves.insert((word.clone(), placement), score);
                    }
                }
            }
        });

        let found_moves = found_moves.into_read_only();
        found_moves.iter()
            .map(|((word, placement), &score)| Candidate {
                word: word.clone(),
                placement: *placement,
                score,
            })
            .collect()
    }

    /// Play the best legal move of `player`, or exchange the whole rack when there is none
    ///
    /// A player with an empty rack passes, neither the board nor the supply change.
    /// On an empty board the rack words are tried from the center, highest raw
    /// value first, across then down. Otherwise the ranked candidates are tried
    /// in order. The first one accepted by the validator is placed, its points go
    /// to the player, and the rack is refilled from `supply`.
    pub fn execute_best_move<Bonuses: BoardBonus>(
        &self,
        validator: &mut PlacementValidator<Bonuses>,
        grid: &mut Grid,
        player: &mut Player,
        supply: &mut impl TileSupply,
    ) -> TurnOutcome {
        if player.rack.is_empty() {
            log::info!("{} has no tile left, passes", player.name);
            return TurnOutcome::Passed
        }

        let attempts: Vec<(String, Placement)> = if grid.is_empty() {
            self.opening_words(validator, &player.rack)
                .into_iter()
                .flat_map(|word| vec![
                    (word.clone(), Placement(CENTER, Direction::Horizontal)),
                    (word, Placement(CENTER, Direction::Vertical)),
                ])
                .collect()
        } else {
            let candidates = self.find_candidates(validator, grid, &player.rack);
            log::debug!("{} candidates for {}", candidates.len(), player.rack.letters());
            candidates.into_iter().map(|c| (c.word, c.placement)).collect()
        };

        for (word, placement) in attempts {
            let tiles = match tiles_for(grid, &player.rack, word.as_bytes(), placement) {
                Some(tiles) => tiles,
                None => continue,
            };
            let mut points = 0;
            if !validator.can_place(grid, &tiles, placement, &mut points) {
                continue
            }

            let tiles_used = tiles.iter()
                .enumerate()
                .filter(|&(i, _)| !grid.is_occupied(placement.nth(i)))
                .map(|(_, tile)| *tile)
                .collect::<Vec<_>>();
            grid.place(&tiles, placement);
            for tile in &tiles_used {
                player.rack.remove_letter(tile.letter);
            }
            player.add_points(points);
            let drawn = player.rack.refill(supply);

            log::info!("{} plays {} at {} for {} points, draws {}", player.name, word, placement, points, drawn);
            return TurnOutcome::Placed(CommittedMove {
                word,
                placement,
                points,
                tiles_used,
            });
        }

        let returned = player.rack.take_all();
        let n_returned = returned.len();
        for tile in returned {
            supply.return_tile(tile);
        }
        let drawn = player.rack.refill(supply);

        log::info!("{} cannot place a word, exchanges {} tiles", player.name, n_returned);
        TurnOutcome::Exchanged {
            returned: n_returned,
            drawn,
        }
    }
}

/// The tiles to lay `word` from `placement`: the board tile where there is one,
/// a rack tile of that letter elsewhere
///
/// None if a board letter differs or the rack is short of a letter.
fn tiles_for(grid: &Grid, rack: &Rack, word: &[u8], placement: Placement) -> Option<Vec<Tile>> {
    let mut rack = rack.clone();
    word.iter()
        .enumerate()
        .map(|(i, &l)| {
            let letter = Letter(l);
            match grid.get(placement.nth(i)) {
                Some(tile) if tile.letter == letter => Some(*tile),
                Some(_) => None,
                None => rack.remove_letter(letter),
            }
        })
        .collect()
}

/// Sum of the values of the rack tiles spelling `word`
fn raw_value(rack: &Rack, word: &str) -> u32 {
    let mut rack = rack.clone();
    word.bytes()
        .filter_map(|l| rack.remove_letter(Letter(l)))
        .map(|tile| tile.value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{board, dictionary, tiles};
    use crate::{Position, ScoreRules, TileBag};
    use crate::Direction::{Horizontal, Vertical};

    fn player(letters: &str) -> Player {
        let mut player = Player::new("bot");
        player.rack = tiles(letters).into_iter().collect();
        player
    }

    #[test]
    fn candidates_through_the_board() {
        let dict = dictionary();
        let validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let grid = board(&[(7, 7, Horizontal, "CAT")]);
        let rack: Rack = tiles("ATXXXXX").into_iter().collect();

        let found = MoveSearch::default().find_candidates(&validator, &grid, &rack);
        let expected = vec![
            Candidate { word: "TA".to_owned(), placement: Placement::new(6, 8, Vertical), score: 3 },
            Candidate { word: "AT".to_owned(), placement: Placement::new(7, 8, Vertical), score: 3 },
            Candidate { word: "AT".to_owned(), placement: Placement::new(6, 9, Vertical), score: 2 },
            Candidate { word: "TA".to_owned(), placement: Placement::new(7, 9, Vertical), score: 2 },
        ];
        assert_eq!(found, expected);
        assert!(validator.played_words().is_empty());
    }

    #[test]
    fn missing_letters_are_never_tried() {
        let dict = dictionary();
        let validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let grid = board(&[(7, 7, Horizontal, "CAT")]);
        let rack: Rack = tiles("ABSTXYO").into_iter().collect();

        let found = MoveSearch::default().find_candidates(&validator, &grid, &rack);
        assert!(!found.is_empty());
        assert!(found.iter().all(|c| !c.word.contains('Z')));
        assert!(found.iter().all(|c| dict.is_valid_word(&c.word)));
    }

    #[test]
    fn strategies_agree() {
        let dict = dictionary();
        let validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let grid = board(&[(7, 7, Horizontal, "CAT"), (7, 9, Vertical, "TAB")]);
        let rack: Rack = tiles("SOATBCR").into_iter().collect();

        let full_scan = MoveSearch::new(AnchorStrategy::FullScan).find_candidates(&validator, &grid, &rack);
        let frontier = MoveSearch::new(AnchorStrategy::Frontier).find_candidates(&validator, &grid, &rack);
        assert!(!frontier.is_empty());
        assert_eq!(full_scan, frontier);
    }

    #[test]
    fn best_move_is_committed() {
        let dict = dictionary();
        let mut validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let mut grid = board(&[(7, 7, Horizontal, "CAT")]);
        let mut bot = player("ATXXXXX");
        let mut bag = TileBag::from_tiles(tiles("E"), 0);

        let outcome = MoveSearch::default().execute_best_move(&mut validator, &mut grid, &mut bot, &mut bag);
        assert_eq!(outcome, TurnOutcome::Placed(CommittedMove {
            word: "TA".to_owned(),
            placement: Placement::new(6, 8, Vertical),
            points: 3,
            tiles_used: tiles("T"),
        }));

        assert_eq!(grid.get(Position::new(6, 8)), Some(&Tile::new(b'T', 1)));
        assert_eq!(bot.score, 3);
        // the A came from the board, the E from the bag
        assert_eq!(bot.rack.len(), 7);
        assert!(bot.rack.contains(Letter(b'A')));
        assert!(bot.rack.contains(Letter(b'E')));
        assert!(!bot.rack.contains(Letter(b'T')));
        assert_eq!(bag.remaining(), 0);
        assert!(validator.played_words().contains("TA"));
    }

    #[test]
    fn opening_with_the_whole_rack() {
        let dict = dictionary();
        let mut validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let mut grid = Grid::new();
        let mut bot = player("SNIATER");
        let mut bag = TileBag::english(1);

        let outcome = MoveSearch::default().execute_best_move(&mut validator, &mut grid, &mut bot, &mut bag);
        match outcome {
            TurnOutcome::Placed(committed) => {
                assert_eq!(committed.word, "RETAINS");
                assert_eq!(committed.placement, Placement::new(7, 7, Horizontal));
                assert_eq!(committed.points, 8 * 2 + 50);
                assert_eq!(committed.tiles_used.len(), 7);
            },
            other => panic!("expected a placement, got {:?}", other),
        }
        assert_eq!(bot.score, 66);
        assert_eq!(bot.rack.len(), 7);
        assert_eq!(bag.remaining(), 98 - 7);
        assert!(!grid.is_empty());
    }

    #[test]
    fn opening_candidates_are_ranked() {
        let dict = dictionary();
        let validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let rack: Rack = tiles("CAT").into_iter().collect();

        let found = MoveSearch::default().find_candidates(&validator, &Grid::new(), &rack);
        assert_eq!(found[0], Candidate { word: "ACT".to_owned(), placement: Placement::new(7, 7, Horizontal), score: 10 });
        assert!(found.iter().all(|c| c.placement.0 == CENTER));
        assert!(found.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn exchange_when_nothing_fits() {
        let dict = dictionary();
        let mut validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let mut grid = board(&[(7, 7, Horizontal, "CAT")]);
        let before = grid.to_rows();
        let mut bot = player("QQVVXXJ");
        let mut empty_bag = TileBag::from_tiles(vec![], 0);

        let outcome = MoveSearch::default().execute_best_move(&mut validator, &mut grid, &mut bot, &mut empty_bag);
        assert_eq!(outcome, TurnOutcome::Exchanged { returned: 7, drawn: 7 });

        let mut letters: Vec<char> = bot.rack.letters().chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['J', 'Q', 'Q', 'V', 'V', 'X', 'X']);
        assert_eq!(bot.score, 0);
        assert_eq!(grid.to_rows(), before);
    }

    #[test]
    fn exchange_draws_a_new_rack() {
        let dict = dictionary();
        let mut validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let mut grid = board(&[(7, 7, Horizontal, "CAT")]);
        let mut bot = player("QQVVXXJ");
        let mut bag = TileBag::from_tiles(tiles("EEEEEEEEEE"), 3);

        let outcome = MoveSearch::default().execute_best_move(&mut validator, &mut grid, &mut bot, &mut bag);
        assert_eq!(outcome, TurnOutcome::Exchanged { returned: 7, drawn: 7 });
        assert_eq!(bag.remaining(), 10);
        assert_eq!(bot.rack.len(), 7);

        // the rack and the bag together hold the same tiles as before the exchange
        let mut letters: Vec<char> = bot.rack.letters().chars().collect();
        while let Some(tile) = bag.draw_tile() {
            letters.push(tile.letter.as_char());
        }
        letters.sort_unstable();
        assert_eq!(letters.into_iter().collect::<String>(), "EEEEEEEEEEJQQVVXX");
    }

    #[test]
    fn empty_rack_passes() {
        let dict = dictionary();
        let mut validator = PlacementValidator::new(&dict, ScoreRules::standard());
        let mut grid = board(&[(7, 7, Horizontal, "CAT")]);
        let before = grid.to_rows();
        let mut bot = player("");
        let mut bag = TileBag::from_tiles(tiles("EAT"), 0);

        let outcome = MoveSearch::default().execute_best_move(&mut validator, &mut grid, &mut bot, &mut bag);
        assert_eq!(outcome, TurnOutcome::Passed);
        assert!(bot.rack.is_empty());
        assert_eq!(bag.remaining(), 3);
        assert_eq!(grid.to_rows(), before);
    }
}
