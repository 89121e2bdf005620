//! Headless play: drive rounds with agents and keep session statistics.

mod stats;

pub use stats::{RoundResult, SessionStats};

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::SessionError;
use crate::game::{GameEngine, Player};

/// Settings for simulated sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rounds to play in one session
    pub rounds: usize,
    /// Seed for the random agents; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Rolling window for win/draw rates
    pub stats_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rounds: 100,
            seed: None,
            stats_window: 100,
        }
    }
}

/// Play the engine's current round to a decision. Red's moves come from
/// `red`, Yellow's from `yellow`.
pub fn play_round(
    engine: &mut GameEngine,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<RoundResult, SessionError> {
    let mut moves = 0;

    while !engine.current_outcome().is_decided() {
        let column = match engine.current_player() {
            Player::Red => pick_column(red, engine)?,
            Player::Yellow => pick_column(yellow, engine)?,
        };
        engine.drop_token(column)?;
        moves += 1;
    }

    Ok(RoundResult {
        winner: engine.current_outcome().winner(),
        moves,
    })
}

fn pick_column(agent: &mut dyn Agent, engine: &GameEngine) -> Result<usize, SessionError> {
    agent
        .select_column(engine)
        .ok_or_else(|| SessionError::NoColumnSelected {
            agent: agent.name().to_string(),
        })
}

/// Play `rounds` rounds back to back, resetting between them. The engine's
/// scoreboard accumulates across the whole session.
pub fn play_session(
    engine: &mut GameEngine,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    rounds: usize,
    stats: &mut SessionStats,
) -> Result<(), SessionError> {
    for _ in 0..rounds {
        if engine.current_outcome().is_decided() || !engine.moves().is_empty() {
            engine.reset();
        }
        let result = play_round(engine, red, yellow)?;
        stats.record_round(result);
    }
    Ok(())
}
