use crate::game::{GameStatus, Player};

use super::runner::GameRecord;

/// Outcome counts over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    red_wins: usize,
    yellow_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        match game.status {
            GameStatus::Won(Player::Red) => self.red_wins += 1,
            GameStatus::Won(Player::Yellow) => self.yellow_wins += 1,
            GameStatus::Draw => self.draws += 1,
            // Only finished games are recorded.
            GameStatus::Ongoing => return,
        }
        self.total_moves += game.moves.len();
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    pub fn losses(&self, player: Player) -> usize {
        self.wins(player.other())
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn win_rate(&self, player: Player) -> f32 {
        self.fraction(self.wins(player))
    }

    pub fn draw_rate(&self) -> f32 {
        self.fraction(self.draws)
    }

    /// Average number of moves per recorded game.
    pub fn average_game_length(&self) -> f32 {
        self.fraction(self.total_moves)
    }

    fn fraction(&self, count: usize) -> f32 {
        match self.games() {
            0 => 0.0,
            n => count as f32 / n as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: GameStatus, len: usize) -> GameRecord {
        GameRecord {
            status,
            moves: vec![0; len],
        }
    }

    #[test]
    fn empty_tally() {
        let tally = Tally::new();
        assert_eq!(tally.games(), 0);
        assert_eq!(tally.win_rate(Player::Red), 0.0);
        assert_eq!(tally.average_game_length(), 0.0);
    }

    #[test]
    fn counts_and_rates() {
        let mut tally = Tally::new();
        tally.record(&record(GameStatus::Won(Player::Yellow), 7));
        tally.record(&record(GameStatus::Won(Player::Yellow), 9));
        tally.record(&record(GameStatus::Won(Player::Red), 10));
        tally.record(&record(GameStatus::Draw, 42));

        assert_eq!(tally.games(), 4);
        assert_eq!(tally.wins(Player::Yellow), 2);
        assert_eq!(tally.losses(Player::Yellow), 1);
        assert_eq!(tally.draws(), 1);
        assert!((tally.win_rate(Player::Yellow) - 0.5).abs() < 1e-6);
        assert!((tally.draw_rate() - 0.25).abs() < 1e-6);
        assert!((tally.average_game_length() - 17.0).abs() < 1e-6);
    }

    #[test]
    fn ongoing_games_are_ignored() {
        let mut tally = Tally::new();
        tally.record(&record(GameStatus::Ongoing, 3));
        assert_eq!(tally.games(), 0);
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn serializes_counts() {
        let mut tally = Tally::new();
        tally.record(&record(GameStatus::Draw, 42));
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json["draws"], 1);
        assert_eq!(json["red_wins"], 0);
        assert_eq!(json["total_moves"], 42);
    }
}
