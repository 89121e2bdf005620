//! Four-in-a-row rules: board representation, players, scoring, and the
//! engine that owns a session's state.

mod board;
mod engine;
mod player;
mod score;

pub use board::{Board, Cell, AXES, COLS, ROWS, WIN_LENGTH};
pub use engine::{
    EngineConfig, GameEngine, Placement, PlayerLabels, RoundOutcome, StartPolicy, MAX_CELLS,
};
pub use player::Player;
pub use score::Scoreboard;
