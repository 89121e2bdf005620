use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
use super::player::Player;
use super::score::Scoreboard;
use crate::error::{ConfigError, MoveError};

/// Result of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "player", rename_all = "snake_case")]
pub enum RoundOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl RoundOutcome {
    /// Whether the round has ended (win or draw)
    pub fn is_decided(self) -> bool {
        self != RoundOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "in progress"),
            RoundOutcome::Win(player) => write!(f, "{} wins", player.name().to_lowercase()),
            RoundOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A successful drop: where the token landed, whose it is, and the round
/// outcome right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub owner: Player,
    pub outcome: RoundOutcome,
}

/// Who opens a round after `reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPolicy {
    /// Every round opens with `EngineConfig::starting_player`.
    #[default]
    Fixed,
    /// Each round opens with the player who did not open the previous one.
    Alternate,
}

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLabels {
    pub red: String,
    pub yellow: String,
}

impl Default for PlayerLabels {
    fn default() -> Self {
        PlayerLabels {
            red: Player::Red.name().to_string(),
            yellow: Player::Yellow.name().to_string(),
        }
    }
}

/// Largest board accepted by `EngineConfig::validate`.
pub const MAX_CELLS: usize = 1 << 16;

/// Engine constants, fixed once the engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub starting_player: Player,
    pub start_policy: StartPolicy,
    pub labels: PlayerLabels,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rows: ROWS,
            cols: COLS,
            win_length: WIN_LENGTH,
            starting_player: Player::Red,
            start_policy: StartPolicy::Fixed,
            labels: PlayerLabels::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("engine.rows must be >= 1".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("engine.cols must be >= 1".into()));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::Validation(
                    "engine.rows * engine.cols is too large".into(),
                ))
            }
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(
                "engine.win_length must be >= 2".into(),
            ));
        }
        if self.win_length > self.rows.max(self.cols) {
            return Err(ConfigError::Validation(
                "engine.win_length must fit on the board".into(),
            ));
        }
        if self.labels.red.trim().is_empty() || self.labels.yellow.trim().is_empty() {
            return Err(ConfigError::Validation(
                "engine.labels must not be empty".into(),
            ));
        }
        if self.labels.red == self.labels.yellow {
            return Err(ConfigError::Validation(
                "engine.labels must be distinct".into(),
            ));
        }
        Ok(())
    }
}

/// Authoritative state of a session: the board and turn of the current
/// round, its outcome, and the scoreboard carried across rounds.
///
/// All mutation goes through [`GameEngine::drop_token`] and
/// [`GameEngine::reset`]; every rejected call leaves the engine as it was.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    current_player: Player,
    round_starter: Player,
    outcome: RoundOutcome,
    scores: Scoreboard,
    round: u32,
    moves: Vec<Placement>,
    winning_line: Option<Vec<(usize, usize)>>,
}

impl GameEngine {
    /// Engine with the conventional 6x7 board, four to win, Red first
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Engine with custom constants
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        GameEngine {
            board: Board::with_size(config.rows, config.cols),
            current_player: config.starting_player,
            round_starter: config.starting_player,
            outcome: RoundOutcome::InProgress,
            scores: Scoreboard::new(),
            round: 1,
            moves: Vec::new(),
            winning_line: None,
            config,
        }
    }

    /// Drop the current player's token into `column`.
    ///
    /// The token settles in the lowest empty row. A winning drop ends the
    /// round, credits the mover and keeps the turn; a drop that fills the
    /// board without a win ends the round as a draw; any other drop passes
    /// the turn.
    pub fn drop_token(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.outcome.is_decided() {
            return Err(MoveError::RoundAlreadyDecided(self.outcome));
        }

        let owner = self.current_player;
        let row = self.board.drop_piece(column, owner.to_cell())?;

        if let Some(line) = self.board.line_through(row, column, self.config.win_length) {
            self.outcome = RoundOutcome::Win(owner);
            self.scores.record_win(owner);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.outcome = RoundOutcome::Draw;
        } else {
            self.current_player = owner.other();
        }

        let placement = Placement {
            row,
            column,
            owner,
            outcome: self.outcome,
        };
        self.moves.push(placement);
        Ok(placement)
    }

    /// Whether the token at (row, col) completes a run of `win_length`
    /// (four by default) on any axis. Only cells within reach of the anchor
    /// are examined.
    pub fn has_four_in_line(&self, row: usize, col: usize) -> bool {
        self.board.has_line_through(row, col, self.config.win_length)
    }

    /// Start a new round: empty board, outcome back to in progress, opening
    /// player chosen by the start policy. Scores are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = RoundOutcome::InProgress;
        self.moves.clear();
        self.winning_line = None;
        self.round = self.round.saturating_add(1);
        self.round_starter = match self.config.start_policy {
            StartPolicy::Fixed => self.config.starting_player,
            StartPolicy::Alternate => self.round_starter.other(),
        };
        self.current_player = self.round_starter;
    }

    pub fn current_scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn current_outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Cell contents, `None` when (row, col) is off the board
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Player to move; after a win this stays on the winner
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Columns that accept a drop, empty once the round is decided
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.outcome.is_decided() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Placements made in this round, oldest first
    pub fn moves(&self) -> &[Placement] {
        &self.moves
    }

    /// 1-based index of the current round within the session
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Cells of the run that decided the round, if it was won
    pub fn winning_line(&self) -> Option<&[(usize, usize)]> {
        self.winning_line.as_deref()
    }

    /// Outcome phrased with the configured labels, e.g. "Crimson wins"
    pub fn describe_outcome(&self) -> String {
        match self.outcome {
            RoundOutcome::Win(player) => format!("{} wins", self.label(player)),
            other => other.to_string(),
        }
    }

    /// Configured display name for a player
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.config.labels.red,
            Player::Yellow => &self.config.labels.yellow,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
