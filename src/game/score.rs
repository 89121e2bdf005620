use serde::{Deserialize, Serialize};

use super::player::Player;

/// Rounds won per player over a session. Survives `GameEngine::reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub red: u32,
    pub yellow: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for one player
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    /// Total decided-by-win rounds
    pub fn total(&self) -> u32 {
        self.red.saturating_add(self.yellow)
    }

    /// Player with strictly more wins, `None` when level
    pub fn leader(&self) -> Option<Player> {
        match self.red.cmp(&self.yellow) {
            std::cmp::Ordering::Greater => Some(Player::Red),
            std::cmp::Ordering::Less => Some(Player::Yellow),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::Red => self.red = self.red.saturating_add(1),
            Player::Yellow => self.yellow = self.yellow.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scoreboard_is_zero() {
        let s = Scoreboard::new();
        assert_eq!(s.get(Player::Red), 0);
        assert_eq!(s.get(Player::Yellow), 0);
        assert_eq!(s.total(), 0);
        assert_eq!(s.leader(), None);
    }

    #[test]
    fn test_record_win() {
        let mut s = Scoreboard::new();
        s.record_win(Player::Yellow);
        s.record_win(Player::Yellow);
        s.record_win(Player::Red);
        assert_eq!(s.get(Player::Red), 1);
        assert_eq!(s.get(Player::Yellow), 2);
        assert_eq!(s.total(), 3);
        assert_eq!(s.leader(), Some(Player::Yellow));
    }

    #[test]
    fn test_record_win_saturates() {
        let mut s = Scoreboard {
            red: u32::MAX,
            yellow: 0,
        };
        s.record_win(Player::Red);
        assert_eq!(s.red, u32::MAX);
    }

    #[test]
    fn test_serializes_per_player() {
        let s = Scoreboard { red: 3, yellow: 1 };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"red":3,"yellow":1}"#);
    }
}
