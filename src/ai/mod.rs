mod agent;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::{Agent, AgentKind, AnyAgent};
pub use heuristic::{Heuristic, LinePotentialHeuristic, WIN_SCORE};
pub use minimax::{winning_move, LeafScoring, MinimaxAgent, SearchConfig, SearchResult};
pub use random::RandomAgent;
