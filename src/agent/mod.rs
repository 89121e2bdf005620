//! Column pickers that can drive an engine without a human at the keyboard.

mod random;

pub use random::RandomAgent;

use crate::game::GameEngine;

/// Anything that can choose the next column for the player to move.
pub trait Agent {
    /// Pick a column for the engine's current player, or `None` if the agent
    /// has nothing to play.
    fn select_column(&mut self, engine: &GameEngine) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
