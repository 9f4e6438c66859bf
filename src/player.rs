use super::Rack;

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub rack: Rack,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}

#[test]
fn test_points_accumulate() {
    let mut player = Player::new("bot");
    player.add_points(10);
    player.add_points(12);
    assert_eq!(player.score, 22);
    assert!(player.rack.is_empty());
}
