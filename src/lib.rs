//! # Connect Four Engine
//!
//! Rules engine for two-player vertical four-in-a-row: gravity drops,
//! anchored win detection, turn alternation and a scoreboard that carries
//! across rounds of a session. Rendering and input handling live outside
//! this crate; callers drive a [`game::GameEngine`] and draw from what it
//! returns.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, scoreboard and the engine state machine
//! - [`agent`] — Agent trait and a random column picker
//! - [`session`] — Headless round runner and session statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
