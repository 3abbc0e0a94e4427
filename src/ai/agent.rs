use rand::rngs::StdRng;

use crate::game::GameState;

use super::minimax::{MinimaxAgent, SearchConfig};
use super::random::RandomAgent;

/// Universal interface for all agents.
pub trait Agent {
    /// Select a column given the current game state. Callers only ask while
    /// the game is ongoing.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// The agent strategies that can be seated from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Random,
}

/// A seated agent of one of the [`AgentKind`] strategies.
pub enum AnyAgent {
    Minimax(MinimaxAgent),
    Random(RandomAgent),
}

impl AnyAgent {
    /// Build an agent of `kind`. `rng` seeds the random agent, or the
    /// minimax agent's fallback.
    pub fn build(kind: AgentKind, search: &SearchConfig, rng: StdRng) -> Self {
        match kind {
            AgentKind::Minimax => {
                AnyAgent::Minimax(MinimaxAgent::new(search.clone(), RandomAgent::from_rng(rng)))
            }
            AgentKind::Random => AnyAgent::Random(RandomAgent::from_rng(rng)),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            AnyAgent::Minimax(_) => AgentKind::Minimax,
            AnyAgent::Random(_) => AgentKind::Random,
        }
    }
}

impl Agent for AnyAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        match self {
            AnyAgent::Minimax(agent) => agent.select_action(state),
            AnyAgent::Random(agent) => agent.select_action(state),
        }
    }

    fn name(&self) -> &str {
        match self {
            AnyAgent::Minimax(agent) => agent.name(),
            AnyAgent::Random(agent) => agent.name(),
        }
    }
}
