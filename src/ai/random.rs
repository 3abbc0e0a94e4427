use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal actions.
///
/// The generator is owned by the agent and can be injected, so games are
/// reproducible under a fixed seed.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        RandomAgent { rng }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let actions = state.legal_moves();
        assert!(!actions.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::with_seed(7);
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            assert!(state.apply_move(2));
        }
        let legal = state.legal_moves();

        for _ in 0..100 {
            let action = agent.select_action(&state);
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_covers_every_column() {
        let mut agent = RandomAgent::with_seed(11);
        let state = GameState::initial();
        let mut counts = [0usize; COLS];
        for _ in 0..1400 {
            counts[agent.select_action(&state)] += 1;
        }
        for (col, &n) in counts.iter().enumerate() {
            assert!(n > 100, "column {col} picked only {n} times");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let state = GameState::initial();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.select_action(&state)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.select_action(&state)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state)
            } else {
                agent2.select_action(&state)
            };
            assert!(state.apply_move(action));
            turn += 1;
        }

        assert!(state.is_terminal());
    }

    #[test]
    #[should_panic(expected = "No legal actions available")]
    fn test_random_agent_panics_without_moves() {
        let mut state = GameState::initial();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let player = if (col / 2 + row) % 2 == 0 {
                    crate::game::Player::Yellow
                } else {
                    crate::game::Player::Red
                };
                state.set_current_player(player);
                assert!(state.apply_move(col));
            }
        }
        RandomAgent::with_seed(3).select_action(&state);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
