use serde::Deserialize;

use super::super::{Direction, Grid, Position};

/// Which occupied squares the search tries to build words through
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
pub enum AnchorStrategy {
    /// Every occupied square
    FullScan,
    /// Only the occupied squares next to an empty one along the direction of play
    Frontier,
}

impl Default for AnchorStrategy {
    fn default() -> Self {
        AnchorStrategy::Frontier
    }
}

impl AnchorStrategy {
    pub fn anchors(self, grid: &Grid, dir: Direction) -> Vec<Position> {
        match self {
            AnchorStrategy::FullScan => grid.occupied().map(|(pos, _)| pos).collect(),
            AnchorStrategy::Frontier => grid.frontier(dir).collect(),
        }
    }
}

#[test]
fn test_anchors() {
    use crate::testing::board;

    let grid = board(&[(7, 7, Direction::Horizontal, "CATS"), (6, 8, Direction::Vertical, "BAT")]);

    assert_eq!(AnchorStrategy::FullScan.anchors(&grid, Direction::Horizontal).len(), 6);
    assert_eq!(
        AnchorStrategy::Frontier.anchors(&grid, Direction::Horizontal),
        vec![Position::new(6, 8), Position::new(7, 7), Position::new(7, 10), Position::new(8, 8)],
    );
    assert!(AnchorStrategy::default() == AnchorStrategy::Frontier);
}
